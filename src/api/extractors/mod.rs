//! Request extractors that validate what they deserialize.

mod validated_json;
mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

/// Format validation errors into a user-friendly string
pub(crate) fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Seats {
        #[validate(range(min = 1, message = "At least one seat must be booked"))]
        seats: i32,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_format_validation_errors_uses_messages_or_field_names() {
        let errors = Seats {
            seats: 0,
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "At least one seat must be booked, name is invalid"
        );
    }
}
