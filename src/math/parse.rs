use std::{num::ParseFloatError, str::FromStr};

use crate::math::{Vector2, Vector3, Vector4};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseVectorError {
    #[error("Expected {expected} comma separated components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("Component {index} ({text:?}) is not a number")]
    InvalidComponent {
        index: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parses `x,y[,z[,w]]`, optionally wrapped in parentheses so the `Display` output
/// reads back in.
fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], ParseVectorError> {
    let s = s.trim();
    let s = s
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(s);

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseVectorError::ComponentCount {
            expected: N,
            found: parts.len(),
        });
    }

    let mut components = [0.0; N];
    for (index, (component, text)) in components.iter_mut().zip(parts).enumerate() {
        *component = text
            .parse()
            .map_err(|source| ParseVectorError::InvalidComponent {
                index,
                text: text.to_string(),
                source,
            })?;
    }
    Ok(components)
}

macro_rules! vec_from_str {
    ($vec_type:ident, $len:literal) => {
        impl FromStr for $vec_type {
            type Err = ParseVectorError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_components::<$len>(s).map(Self)
            }
        }
    };
}

vec_from_str!(Vector2, 2);
vec_from_str!(Vector3, 3);
vec_from_str!(Vector4, 4);
