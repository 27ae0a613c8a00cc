pub mod aggregate;
pub mod costs;
pub mod credentials;
pub mod error;
pub mod palette;
pub mod pricing;
pub mod share;
pub mod state;
pub mod util;

pub use aggregate::aggregate;
pub use costs::{UnknownModel, record_cost};
pub use credentials::{
    MISSING_FIELDS_MESSAGE, validate_api_key, validate_inputs, validate_organization_key,
};
pub use error::{ApiError, AppError, Result};
pub use palette::user_color;
pub use pricing::{PriceTable, load_price_rows, load_table, write_price_rows};
pub use share::{RestoredInputs, restore, share_link};
pub use state::{LoadEvent, LoadPhase, SessionState};
pub use util::time::{day_label, default_range, validate_date};
