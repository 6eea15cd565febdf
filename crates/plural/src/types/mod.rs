mod category;
mod forms;
mod quantity;
mod request;
mod substitutions;

pub use category::Category;
pub use forms::WordForms;
pub use quantity::Quantity;
pub use request::VariantRequest;
pub use substitutions::Substitutions;
