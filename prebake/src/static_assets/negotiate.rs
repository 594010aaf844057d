use std::collections::HashMap;

use bytes::Bytes;

use crate::coding::Coding;

use super::accept::AcceptEncodingSpecs;

/// Picks the coding to serve, or `None` for 406 Not Acceptable.
///
/// Compressed candidates are scanned in server-preference order with a
/// strictly-greater comparison, so the earliest entry wins q ties. An
/// identity the client declared explicitly overrides compressed variants of
/// lower *or equal* quality.
pub(crate) fn negotiate(
    specs: &AcceptEncodingSpecs,
    preferred: &[Coding],
    variants: &HashMap<Coding, Bytes>,
) -> Option<Coding> {
    if preferred.is_empty() || variants.is_empty() {
        return None;
    }

    let mut best: Option<Coding> = None;
    let mut best_q = -1.0_f32;
    for &coding in preferred {
        if coding == Coding::Identity || !variants.contains_key(&coding) {
            continue;
        }
        let q = specs.q_for(coding);
        if q <= 0.0 {
            continue;
        }
        if q > best_q {
            best_q = q;
            best = Some(coding);
        }
    }

    let identity_q = specs.q_for(Coding::Identity);
    if specs.declares(Coding::Identity)
        && identity_q >= best_q
        && identity_q > 0.0
        && variants.contains_key(&Coding::Identity)
    {
        return Some(Coding::Identity);
    }

    if best.is_some() {
        return best;
    }

    if identity_q > 0.0 && variants.contains_key(&Coding::Identity) {
        return Some(Coding::Identity);
    }

    None
}
