use std::collections::HashMap;

use crate::coding::Coding;

/// Parsed `Accept-Encoding` header: explicit declarations plus an optional
/// wildcard, with q-values clamped to `[0, 1]`.
#[derive(Debug, Default)]
pub(crate) struct AcceptEncodingSpecs {
    declared: HashMap<Coding, f32>,
    wildcard: f32,
    has_wildcard: bool,
    header_present: bool,
}

impl AcceptEncodingSpecs {
    pub(crate) fn declares(&self, coding: Coding) -> bool {
        self.declared.contains_key(&coding)
    }

    /// Effective q-value for `coding` under RFC 9110 §12.5.3 semantics:
    /// an absent header means "identity only"; undeclared identity defaults
    /// to q=1 unless a `*;q=0` blanket ban is in effect; other undeclared
    /// codings inherit the wildcard q, or 0 without one.
    pub(crate) fn q_for(&self, coding: Coding) -> f32 {
        if !self.header_present {
            return if coding == Coding::Identity { 1.0 } else { 0.0 };
        }

        if let Some(&q) = self.declared.get(&coding) {
            return q;
        }

        if coding == Coding::Identity {
            if self.has_wildcard && self.wildcard == 0.0 {
                return 0.0;
            }
            return 1.0;
        }

        if self.has_wildcard {
            return self.wildcard;
        }

        0.0
    }
}

/// Tokenizes one `Accept-Encoding` value. Unknown coding names are dropped,
/// unparseable q parameters are ignored, and the last declaration of a name
/// wins.
pub(crate) fn parse_accept_encoding(header: &str) -> AcceptEncodingSpecs {
    let header = header.trim();
    let mut specs = AcceptEncodingSpecs {
        header_present: !header.is_empty(),
        ..Default::default()
    };
    if header.is_empty() {
        return specs;
    }

    for part in header.split(',') {
        let token = part.trim();
        if token.is_empty() {
            continue;
        }

        let (name, q) = match token.split_once(';') {
            None => (token, 1.0),
            Some((name, params)) => {
                let mut q = 1.0_f32;
                for param in params.split(';') {
                    let Some((key, value)) = param.split_once('=') else {
                        continue;
                    };
                    if !key.trim().eq_ignore_ascii_case("q") {
                        continue;
                    }
                    if let Ok(parsed) = value.trim().parse::<f32>() {
                        q = parsed.clamp(0.0, 1.0);
                    }
                }
                (name.trim(), q)
            }
        };

        if name == "*" {
            specs.wildcard = q;
            specs.has_wildcard = true;
            continue;
        }

        if let Some(coding) = Coding::parse(name) {
            specs.declared.insert(coding, q);
        }
    }

    specs
}
