use crate::errors::AppResult;
use crate::utils::time::time_options;

/// Print the selectable half-hour times with their 12-hour labels, the way
/// the time pickers offer them.
pub fn handle() -> AppResult<()> {
    for (value, label) in time_options() {
        println!("{}  {}", value.format("%H:%M"), label);
    }
    Ok(())
}
