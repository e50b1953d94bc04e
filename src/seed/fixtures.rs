//! Embedded observation import fixtures.
//!
//! The Simple CSV patterns carry a [`LOCATION_PLACEHOLDER`] in the
//! `Location ID` and `Sample ID` columns, substituted per target location
//! before upload.

/// Placeholder substituted with the target location's custom id.
pub const LOCATION_PLACEHOLDER: &str = "{locationId}";

/// Substitute the location placeholder throughout a CSV pattern.
#[must_use]
pub fn for_location(pattern: &str, location_custom_id: &str) -> String {
    pattern.replace(LOCATION_PLACEHOLDER, location_custom_id)
}

/// 34-column Simple CSV observation set: Ammonia and Total Dissolved
/// Solids grab samples over the demo visit window, including a non-detect
/// row and a three-depth profile at 09:20.
pub const OBSERVATIONS_BASIC: &str = "\
Observation ID,Location ID,Observed Property ID,Observed DateTime,Analyzed DateTime,Depth,Depth Unit,Data Classification,Result Value,Result Unit,Result Status,Result Grade,Medium,Sample ID,Collection Method,Field: Device ID,Field: Device Type,Field: Comment,Lab: Specimen Name,Lab: Analysis Method,Lab: Detection Condition,Lab: Limit Type,Lab: MDL,Lab: MRL,Lab: Quality Flag,Lab: Received DateTime,Lab: Prepared DateTime,Lab: Sample Fraction,Lab: From Laboratory,Lab: Sample ID,Lab: Dilution Factor,Lab: Comment,QC: Type,QC: Source Sample ID
,{locationId},Ammonia,2014-10-29T09:00:00.000-07:00,2014-10-29T09:00:00.000-07:00,5,ft,LAB,8.6,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_1,GRAB,,,,bottle1,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:10:00.000-07:00,2014-10-29T09:10:00.000-07:00,5,ft,LAB,,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_2,GRAB,,,,bottle2-ND,,not detected,LOWER,50,0.1,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:20:00.000-07:00,2014-10-29T09:20:00.000-07:00,5,ft,LAB,8.2,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_1,GRAB,,,,bottle3,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:20:00.000-07:00,2014-10-29T09:20:00.000-07:00,10,ft,LAB,8.4,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_2,GRAB,,,,bottle3_1,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:20:00.000-07:00,2014-10-29T09:20:00.000-07:00,20,ft,LAB,8.4,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_3,GRAB,,,,bottle3_2,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:30:00.000-07:00,2014-10-29T09:30:00.000-07:00,5,ft,LAB,8.8,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_4,GRAB,,,,bottle4,,,LOWER,,,,,,,,,,,,
,{locationId},Total Dissolved Solids,2014-10-29T09:00:00.000-07:00,2014-10-29T09:00:00.000-07:00,5,ft,LAB,8.6,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_1,GRAB,,,,bottle1,,,LOWER,,,,,,,,,,,,
,{locationId},Total Dissolved Solids,2014-10-29T09:10:00.000-07:00,2014-10-29T09:10:00.000-07:00,5,ft,LAB,,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_2,GRAB,,,,bottle2-ND,,not detected,LOWER,50,0.1,,,,,,,,,,
,{locationId},Total Dissolved Solids,2014-10-29T09:20:00.000-07:00,2014-10-29T09:20:00.000-07:00,5,ft,LAB,8.2,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_1,GRAB,,,,bottle3,,,LOWER,,,,,,,,,,,,
,{locationId},Total Dissolved Solids,2014-10-29T09:30:00.000-07:00,2014-10-29T09:30:00.000-07:00,5,ft,LAB,8.8,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_4,GRAB,,,,bottle4,,,LOWER,,,,,,,,,,,,
";

/// Variant exercising the extreme-timestamp path, with the extra
/// `Standards Violations` column some servers emit.
pub const OBSERVATIONS_EXTREME_DATES: &str = "\
Observation ID,Location ID,Observed Property ID,Observed DateTime,Analyzed DateTime,Depth,Depth Unit,Data Classification,Result Value,Result Unit,Result Status,Result Grade,Medium,Sample ID,Collection Method,Field: Device ID,Field: Device Type,Field: Comment,Lab: Specimen Name,Lab: Analysis Method,Lab: Detection Condition,Lab: Limit Type,Lab: MDL,Lab: MRL,Lab: Quality Flag,Lab: Received DateTime,Lab: Prepared DateTime,Lab: Sample Fraction,Lab: From Laboratory,Lab: Sample ID,Lab: Dilution Factor,Lab: Comment,QC: Type,QC: Source Sample ID,Standards Violations
,{locationId},Ammonia,1700-01-01T09:10:00.000-07:00,1700-01-01T09:10:00.000-07:00,,,LAB,8.2,mg/l,PRELIMINARY,OK,WATER,{locationId}_SA_17000101_bottle1,,,,,bottle1,,,,,,,,,,,,,,,,
,{locationId},Ammonia,3000-01-01T09:10:00.000-07:00,3000-01-01T09:10:00.000-07:00,,,LAB,8.6,mg/l,PRELIMINARY,OK,WATER,{locationId}_SA_30000101_bottle1,,,,,bottle1,,,,,,,,,,,,,,,,
";

/// Second-sync variant of [`OBSERVATIONS_BASIC`] with shifted analyzed
/// times and Total suspended solids in place of Total Dissolved Solids.
pub const OBSERVATIONS_SECOND_SYNC: &str = "\
Observation ID,Location ID,Observed Property ID,Observed DateTime,Analyzed DateTime,Depth,Depth Unit,Data Classification,Result Value,Result Unit,Result Status,Result Grade,Medium,Sample ID,Collection Method,Field: Device ID,Field: Device Type,Field: Comment,Lab: Specimen Name,Lab: Analysis Method,Lab: Detection Condition,Lab: Limit Type,Lab: MDL,Lab: MRL,Lab: Quality Flag,Lab: Received DateTime,Lab: Prepared DateTime,Lab: Sample Fraction,Lab: From Laboratory,Lab: Sample ID,Lab: Dilution Factor,Lab: Comment,QC: Type,QC: Source Sample ID
,{locationId},Ammonia,2014-10-29T09:00:00.000-07:00,2014-10-29T09:05:00.000-07:00,5,ft,LAB,9.6,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_1,GRAB,,,,bottle1,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:10:00.000-07:00,2014-10-29T09:10:00.000-07:00,5,ft,LAB,,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_2,GRAB,,,,bottle2-ND,,not detected,LOWER,50,0.1,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:20:00.000-07:00,2014-10-29T09:15:00.000-07:00,5,ft,LAB,9.2,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_1,GRAB,,,,bottle3,,,LOWER,,,,,,,,,,,,
,{locationId},Ammonia,2014-10-29T09:30:00.000-07:00,2014-10-29T09:20:00.000-07:00,5,ft,LAB,9.8,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_4,GRAB,,,,bottle4,,,LOWER,,,,,,,,,,,,
,{locationId},Total suspended solids,2014-10-29T09:00:00.000-07:00,2014-10-29T09:05:00.000-07:00,5,ft,LAB,9.6,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_1,GRAB,,,,bottle1,,,LOWER,,,,,,,,,,,,
,{locationId},Total suspended solids,2014-10-29T09:10:00.000-07:00,2014-10-29T09:10:00.000-07:00,5,ft,LAB,,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_2,GRAB,,,,bottle2-ND,,not detected,LOWER,50,0.1,,,,,,,,,,
,{locationId},Total suspended solids,2014-10-29T09:20:00.000-07:00,2014-10-29T09:15:00.000-07:00,5,ft,LAB,9.2,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_3_1,GRAB,,,,bottle3,,,LOWER,,,,,,,,,,,,
,{locationId},Total suspended solids,2014-10-29T09:30:00.000-07:00,2014-10-29T09:20:00.000-07:00,5,ft,LAB,9.8,mg/l,Preliminary,Ok,Water,{locationId}_SA_20141029_4,GRAB,,,,bottle4,,,LOWER,,,,,,,,,,,,
";

/// Default vertical profile data uploaded for vertical-profile locations.
pub const VERTICAL_PROFILE: &str = "\
Observed DateTime,Depth,Depth Unit,Observed Property ID,Result Value,Result Unit
2014-10-29T09:00:00.000-07:00,1,m,Temperature,15.1,°F
2014-10-29T09:00:00.000-07:00,2,m,Temperature,14.8,°F
2014-10-29T09:00:00.000-07:00,5,m,Temperature,13.9,°F
2014-10-29T09:00:00.000-07:00,1,m,DO (Concentration),9.4,mg/l
2014-10-29T09:00:00.000-07:00,2,m,DO (Concentration),9.1,mg/l
2014-10-29T09:00:00.000-07:00,5,m,DO (Concentration),8.2,mg/l
";

/// File name the vertical profile fixture is uploaded under.
pub const VERTICAL_PROFILE_FILE_NAME: &str = "DefaultVerticalProfileData.csv";

/// File name the observation fixtures are uploaded under.
pub const OBSERVATIONS_FILE_NAME: &str = "observations_data.csv";
