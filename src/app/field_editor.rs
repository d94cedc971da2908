//! Turns user gestures on one field into exactly one `FieldInput`.

use dbtune_domain::{ConfigValue, FieldInput, FieldKind};

use crate::field_view::{SelectChoice, select_choices};
use crate::text_input::EditBuffer;

/// What activating a field does.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Booleans flip immediately.
    Apply(FieldInput),
    /// Dropdown opens with the current value highlighted.
    OpenDropdown { selected_index: usize },
    /// Text and numbers open a draft seeded from the current value.
    EditDraft(EditBuffer),
}

pub fn activate(kind: &FieldKind, current: Option<&ConfigValue>) -> Activation {
    match kind {
        FieldKind::Boolean => {
            let on = current.and_then(ConfigValue::as_bool).unwrap_or(false);
            Activation::Apply(FieldInput::Toggle(!on))
        }
        FieldKind::Select { options } => {
            let current = current.map(ToString::to_string);
            let selected_index = select_choices(options)
                .iter()
                .position(|choice| {
                    matches!(choice, SelectChoice::Option(o) if Some(*o) == current.as_deref())
                })
                .unwrap_or(0);
            Activation::OpenDropdown { selected_index }
        }
        FieldKind::Integer { .. } | FieldKind::Real { .. } | FieldKind::Text { .. } => {
            let seed = current.map(ToString::to_string).unwrap_or_default();
            Activation::EditDraft(EditBuffer::with_text(seed))
        }
    }
}

/// An emptied draft clears the field.
pub fn draft_input(draft: &EditBuffer) -> FieldInput {
    if draft.is_empty() {
        FieldInput::Unset
    } else {
        FieldInput::Text(draft.as_str().to_string())
    }
}

/// `None` when the index is outside the choice list.
pub fn choice_input(options: &[String], index: usize) -> Option<FieldInput> {
    select_choices(options)
        .get(index)
        .map(|choice| choice.to_input())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn select_kind() -> FieldKind {
        FieldKind::Select {
            options: vec!["local".into(), "available".into(), "majority".into()],
        }
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(ConfigValue::Bool(false)), true)]
    #[case(Some(ConfigValue::Bool(true)), false)]
    fn boolean_flips_current_value(#[case] current: Option<ConfigValue>, #[case] next: bool) {
        let activation = activate(&FieldKind::Boolean, current.as_ref());

        assert_eq!(activation, Activation::Apply(FieldInput::Toggle(next)));
    }

    #[rstest]
    #[case(None, 0)]
    #[case(Some(ConfigValue::Text("available".into())), 2)]
    #[case(Some(ConfigValue::Text("gone".into())), 0)]
    fn select_opens_at_current_choice(#[case] current: Option<ConfigValue>, #[case] index: usize) {
        let activation = activate(&select_kind(), current.as_ref());

        assert_eq!(activation, Activation::OpenDropdown { selected_index: index });
    }

    #[test]
    fn numeric_draft_is_seeded_from_value() {
        let kind = FieldKind::Integer {
            min: None,
            max: None,
        };

        let activation = activate(&kind, Some(&ConfigValue::Number(3.0)));

        assert_eq!(activation, Activation::EditDraft(EditBuffer::with_text("3")));
    }

    #[test]
    fn unset_text_draft_starts_empty() {
        let kind = FieldKind::Text {
            min_length: None,
            max_length: None,
            pattern: None,
        };

        assert_eq!(
            activate(&kind, None),
            Activation::EditDraft(EditBuffer::default())
        );
    }

    #[test]
    fn empty_draft_is_unset() {
        assert_eq!(draft_input(&EditBuffer::default()), FieldInput::Unset);
        assert_eq!(
            draft_input(&EditBuffer::with_text("0")),
            FieldInput::Text("0".into())
        );
    }

    #[rstest]
    #[case(0, Some(FieldInput::Unset))]
    #[case(3, Some(FieldInput::Text("majority".into())))]
    #[case(4, None)]
    fn choice_index_maps_to_input(#[case] index: usize, #[case] expected: Option<FieldInput>) {
        let FieldKind::Select { options } = select_kind() else {
            unreachable!()
        };

        assert_eq!(choice_input(&options, index), expected);
    }
}
