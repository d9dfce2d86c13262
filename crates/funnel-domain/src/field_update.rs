/// Three-state change for an optional field in a partial update.
///
/// - `NoChange`: the current value is kept
/// - `Set(value)`: the field becomes `Some(value)`
/// - `Clear`: the field becomes `None`
///
/// # Example
///
/// ```
/// use funnel_domain::FieldUpdate;
///
/// let mut phone = Some("+55 11 99999-0000".to_string());
/// FieldUpdate::<String>::NoChange.apply_to(&mut phone);
/// assert!(phone.is_some());
///
/// FieldUpdate::Clear.apply_to(&mut phone);
/// assert_eq!(phone, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    /// `Some(v)` sets, `None` leaves the field alone.
    ///
    /// Command-line flags use this: an absent flag means "keep".
    pub fn set_if_some(value: Option<T>) -> Self {
        value.map(FieldUpdate::Set).unwrap_or(FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some(v)` sets, `None` clears.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let mut color = Some("blue".to_string());
        FieldUpdate::Set("red".to_string()).apply_to(&mut color);
        assert_eq!(color.as_deref(), Some("red"));
    }

    #[test]
    fn test_from_option_clears_on_none() {
        let mut color = Some("blue".to_string());
        FieldUpdate::from(None).apply_to(&mut color);
        assert_eq!(color, None);
    }

    #[test]
    fn test_set_if_some_keeps_on_none() {
        let update: FieldUpdate<String> = FieldUpdate::set_if_some(None);
        assert!(!update.is_change());
        assert!(FieldUpdate::set_if_some(Some(1)).is_change());
    }
}
