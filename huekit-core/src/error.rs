use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Non-finite {component} component: {value}")]
    NonFinite { component: &'static str, value: f64 },

    #[error("Expected {expected} color components, found {found}")]
    ComponentCount { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_display() {
        let error = ColorError::NonFinite {
            component: "red",
            value: f64::NAN,
        };
        assert_eq!(error.to_string(), "Non-finite red component: NaN");

        let error = ColorError::NonFinite {
            component: "hue",
            value: f64::NEG_INFINITY,
        };
        assert_eq!(error.to_string(), "Non-finite hue component: -inf");
    }

    #[test]
    fn test_component_count_display() {
        let error = ColorError::ComponentCount {
            expected: 3,
            found: 4,
        };
        assert_eq!(error.to_string(), "Expected 3 color components, found 4");
    }

    #[test]
    fn test_color_error_debug() {
        let error = ColorError::ComponentCount {
            expected: 3,
            found: 0,
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ComponentCount"));
        assert!(debug_str.contains("found: 0"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<u8> = Err(ColorError::ComponentCount {
            expected: 3,
            found: 2,
        });

        match result.unwrap_err() {
            ColorError::ComponentCount { expected, found } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("Expected ComponentCount variant"),
        }
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }
}
