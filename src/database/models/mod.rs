pub mod item;
pub mod tenant;

pub use item::{ExampleItem, ItemInputError, ItemSummary, NewExampleItem};
pub use tenant::TenantItemCount;
