use crate::error::Result;
use crate::models::DailyRecord;

pub const RECORDS_KEY: &str = "badminton_center_data_v2";
pub const STAFF_KEY: &str = "badminton_staff_list";
pub const THEME_KEY: &str = "theme";

/// Where day sheets, the staff roster and preferences live.
pub trait RecordStore {
    /// Every saved sheet, upgraded to the current shape.
    fn list_all(&self) -> Result<Vec<DailyRecord>>;

    /// Replace the sheet with the same (date, center), or append it.
    fn upsert(&self, record: &DailyRecord) -> Result<()>;

    /// Saved roster, or the default roster when none was ever saved.
    fn list_staff(&self) -> Result<Vec<String>>;

    fn save_staff(&self, staff: &[String]) -> Result<()>;

    fn get_preference(&self, key: &str) -> Result<Option<String>>;

    fn set_preference(&self, key: &str, value: &str) -> Result<()>;
}
