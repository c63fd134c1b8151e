use std::collections::HashSet;
use std::sync::Arc;

use kakitori_types::KanjiRecord;

use crate::error::SelectError;
use crate::store::RecordStore;

/// Kanken levels in dense ordinal order: ordinal 1 is level "1" (hardest),
/// ordinal 12 is level "10" (easiest). The half-steps 1.5 and 2.5 sit
/// between the whole levels, which is why this is a literal table and not
/// arithmetic.
const KANKEN_LEVELS: [&str; 12] = [
    "1", "1.5", "2", "2.5", "3", "4", "5", "6", "7", "8", "9", "10",
];

/// Grade "S" continues the 1..6 sequence when expanding ranges.
const GRADE_S_ORDINAL: u32 = 7;

/// Resolve a selection expression against the store.
///
/// The expression is a comma-separated list of clauses; each clause is
/// either a bare key token ("3", "S", "k2.5") or a range of two tokens
/// ("1-3", "k10-k5", "2-S"). Records matched by any clause are unioned
/// and deduplicated by record identity. Unknown keys match nothing; a
/// malformed clause aborts the whole resolution.
pub fn resolve(
    store: &RecordStore,
    expression: &str,
) -> Result<Vec<Arc<KanjiRecord>>, SelectError> {
    let mut keys = Vec::new();
    for clause in expression.split(',') {
        expand_clause(clause, &mut keys)?;
    }

    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for key in &keys {
        for record in store.lookup(key) {
            if seen.insert(Arc::as_ptr(record)) {
                result.push(Arc::clone(record));
            }
        }
    }

    Ok(result)
}

/// Expand one clause into store keys.
fn expand_clause(clause: &str, keys: &mut Vec<String>) -> Result<(), SelectError> {
    let parts: Vec<&str> = clause.split('-').collect();
    match parts.as_slice() {
        [token] => {
            keys.push(fold_token(token));
            Ok(())
        }
        [lower, upper] => expand_range(clause, lower, upper, keys),
        _ => Err(SelectError::MalformedClause(clause.to_string())),
    }
}

/// Whole-token case fold. The grade-"S" bucket is keyed uppercase, so a
/// folded bare "s" maps back to it; a kanken token keeps its "k" prefix
/// because folding never touches it.
fn fold_token(token: &str) -> String {
    let folded = token.to_lowercase();
    if folded == "s" {
        "S".to_string()
    } else {
        folded
    }
}

/// Expand a two-endpoint range into the keys it covers.
fn expand_range(
    clause: &str,
    lower: &str,
    upper: &str,
    keys: &mut Vec<String>,
) -> Result<(), SelectError> {
    let lower = lower.to_lowercase();
    let upper = upper.to_lowercase();

    // A "k" marker on either endpoint makes the whole range kanken.
    let is_kanken = lower.starts_with('k') || upper.starts_with('k');

    let (mut lo, mut hi) = if is_kanken {
        (
            kanken_ordinal(strip_marker(&lower), clause)?,
            kanken_ordinal(strip_marker(&upper), clause)?,
        )
    } else {
        (
            grade_ordinal(&lower, clause)?,
            grade_ordinal(&upper, clause)?,
        )
    };

    // The author may write either end first.
    if hi < lo {
        std::mem::swap(&mut lo, &mut hi);
    }

    for ordinal in lo..=hi {
        if is_kanken {
            keys.push(format!("k{}", KANKEN_LEVELS[(ordinal - 1) as usize]));
        } else if ordinal == GRADE_S_ORDINAL {
            keys.push("S".to_string());
        } else {
            keys.push(ordinal.to_string());
        }
    }

    Ok(())
}

fn strip_marker(endpoint: &str) -> &str {
    endpoint.strip_prefix('k').unwrap_or(endpoint)
}

/// Dense ordinal of a grade endpoint; "s" continues the sequence as 7.
fn grade_ordinal(endpoint: &str, clause: &str) -> Result<u32, SelectError> {
    if endpoint == "s" {
        return Ok(GRADE_S_ORDINAL);
    }
    endpoint.parse().map_err(|_| SelectError::BadEndpoint {
        clause: clause.to_string(),
        endpoint: endpoint.to_string(),
    })
}

/// Dense ordinal of a kanken endpoint, via the level table.
fn kanken_ordinal(endpoint: &str, clause: &str) -> Result<u32, SelectError> {
    KANKEN_LEVELS
        .iter()
        .position(|level| *level == endpoint)
        .map(|i| (i + 1) as u32)
        .ok_or_else(|| SelectError::BadEndpoint {
            clause: clause.to_string(),
            endpoint: endpoint.to_string(),
        })
}
