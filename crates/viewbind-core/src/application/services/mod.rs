//! Application services.

mod binding_pass;

pub use binding_pass::BindingPass;
