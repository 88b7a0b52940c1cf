//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod detail_view;
mod idea_list;
mod new_idea_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_view::DetailView;
pub use idea_list::IdeaList;
pub use new_idea_form::NewIdeaForm;
