//! Category list and add/edit form state.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::Category;
use crate::util::validation::validate_category_name;

pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories";
pub const SAVE_CATEGORY_FAILED: &str = "Failed to save category";
pub const DELETE_CATEGORY_FAILED: &str = "Failed to delete category";

/// Which record the open form targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Editor {
    Create,
    Edit { id: i64 },
}

/// A validated save, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySubmit {
    Create { name: String },
    Update { id: i64, name: String },
}

#[derive(Clone, Debug, Default)]
pub struct CategoryEditorState {
    pub items: Vec<Category>,
    pub loading: bool,
    /// `None` while the form is hidden.
    pub editor: Option<Editor>,
    pub name: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CategoryEditorState {
    pub fn open_create(&mut self) {
        self.editor = Some(Editor::Create);
        self.name.clear();
        self.error = None;
    }

    pub fn open_edit(&mut self, category: &Category) {
        self.editor = Some(Editor::Edit { id: category.id });
        self.name.clone_from(&category.name);
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.editor = None;
        self.name.clear();
        self.error = None;
        self.submitting = false;
    }

    /// Validate the form and mark it submitting. On a blank name the error is
    /// recorded and nothing is returned.
    pub fn submit_request(&mut self) -> Option<CategorySubmit> {
        let editor = self.editor?;
        match validate_category_name(&self.name) {
            Ok(name) => {
                self.error = None;
                self.submitting = true;
                Some(match editor {
                    Editor::Create => CategorySubmit::Create { name },
                    Editor::Edit { id } => CategorySubmit::Update { id, name },
                })
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                None
            }
        }
    }

    /// Close the form after a successful save.
    pub fn finish_submit(&mut self) {
        self.cancel();
    }

    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.editor, Some(Editor::Edit { .. }))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Saving..."
        } else if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Category" } else { "Add New Category" }
    }
}

pub fn delete_confirmation(name: &str) -> String {
    format!("Are you sure you want to delete category \"{name}\"?")
}
