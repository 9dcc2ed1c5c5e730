use crate::errors::AppResult;
use crate::models::bristol::BristolCategory;
use crate::ui::messages::header;

/// Print the Bristol scale as accepted by `add`.
pub fn handle() -> AppResult<()> {
    header("Bristol scale");
    for c in BristolCategory::ALL {
        println!("  {}  {}", c.code(), c.label());
    }
    Ok(())
}
