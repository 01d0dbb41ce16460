/// Per-field input state, including the floating-label markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub focused: bool,
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    UnknownField(String),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(f, "Unknown form field: {name}"),
        }
    }
}

impl std::error::Error for FormError {}

/// A form as the visitor sees it: editable fields plus hidden values that
/// survive a reset.
#[derive(Debug, Clone)]
pub struct Form {
    action: String,
    hidden: Vec<(String, String)>,
    fields: Vec<(String, FieldState)>,
}

impl Form {
    pub fn new(action: impl Into<String>, field_names: &[&str]) -> Self {
        Self {
            action: action.into(),
            hidden: Vec::new(),
            fields: field_names
                .iter()
                .map(|name| (name.to_string(), FieldState::default()))
                .collect(),
        }
    }

    pub fn contact(action: impl Into<String>) -> Self {
        Self::new(action, &["name", "email", "message"])
    }

    pub fn enquiry(action: impl Into<String>) -> Self {
        Self::new(action, &["name", "email", "project", "message"]).with_hidden("type", "enquiry")
    }

    pub fn with_hidden(mut self, name: &str, value: &str) -> Self {
        self.hidden.push((name.to_string(), value.to_string()));
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn focus(&mut self, name: &str) -> Result<(), FormError> {
        self.field_mut(name)?.focused = true;
        Ok(())
    }

    /// Leaving a field keeps the label raised while it still holds text.
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        let field = self.field_mut(name)?;
        if field.value.is_empty() {
            field.focused = false;
        }
        Ok(())
    }

    pub fn input(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = self.field_mut(name)?;
        field.value = value.to_string();
        field.filled = !field.value.is_empty();
        Ok(())
    }

    /// Clear every value and marker. Hidden values are kept.
    pub fn reset(&mut self) {
        for (_, field) in &mut self.fields {
            *field = FieldState::default();
        }
    }

    /// Request payload: hidden values first, then fields in form order.
    pub fn payload(&self) -> Vec<(String, String)> {
        self.hidden
            .iter()
            .cloned()
            .chain(
                self.fields
                    .iter()
                    .map(|(name, field)| (name.clone(), field.value.clone())),
            )
            .collect()
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FieldState, FormError> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}
