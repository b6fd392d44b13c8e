use crate::model::PlayerDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Breed,
    Status,
    ImageUrl,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Breed,
        FormField::Status,
        FormField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Breed => "Breed",
            FormField::Status => "Status",
            FormField::ImageUrl => "Image URL",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Breed => 1,
            FormField::Status => 2,
            FormField::ImageUrl => 3,
        }
    }
}

/// The new-player form. Values are kept across submissions.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    name: String,
    breed: String,
    status: String,
    image_url: String,
    focused: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focused % FormField::ALL.len()]
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field.index();
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Breed => &self.breed,
            FormField::Status => &self.status,
            FormField::ImageUrl => &self.image_url,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Breed => &mut self.breed,
            FormField::Status => &mut self.status,
            FormField::ImageUrl => &mut self.image_url,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused();
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        self.value_mut(field).pop();
    }

    /// Raw field values, untrimmed and unvalidated. Empty strings are kept.
    pub fn draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.clone(),
            breed: self.breed.clone(),
            status: self.status.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = FormState::new();
        for c in "Rex".chars() {
            form.push_char(c);
        }
        form.focus_next();
        form.push_char('L');
        form.push_char('x');
        form.backspace();
        assert_eq!(form.value(FormField::Name), "Rex");
        assert_eq!(form.value(FormField::Breed), "L");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = FormState::new();
        form.focus_prev();
        assert_eq!(form.focused(), FormField::ImageUrl);
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn draft_keeps_whitespace() {
        let mut form = FormState::new();
        form.set(FormField::Name, " Fido ");
        let draft = form.draft();
        assert_eq!(draft.name, " Fido ");
        assert_eq!(draft.breed, "");
    }
}
