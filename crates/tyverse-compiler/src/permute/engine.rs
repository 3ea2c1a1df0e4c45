//! Materializes a permuted domain from its base.
//!
//! Stages run in a fixed order, each one completed before the next starts:
//! exclusions, then sum edits, then inclusions. Sum edits therefore only ever
//! see types that survived exclusion from the base domain, never freshly
//! included ones. The first failing clause aborts the whole permutation.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::diagnostics::{SemanticError, SemanticErrorKind};
use crate::domain::TypeDomain;
use crate::invariants;
use crate::types::{SumType, Type};

use super::{PermutedDomain, PermutedSum};

/// Published domains by tag.
pub type DomainMap = IndexMap<String, TypeDomain>;

/// Apply `permuted` to its base domain, looked up in `domains`.
///
/// Tag uniqueness of the result is not checked here; duplicates introduced by
/// `included_types` are left for validation.
pub fn compute_permutation(
    permuted: &PermutedDomain,
    domains: &DomainMap,
) -> Result<TypeDomain, SemanticError> {
    let Some(base) = domains.get(&permuted.permutes_domain) else {
        return Err(SemanticError::at(
            &permuted.meta,
            SemanticErrorKind::DomainPermutesNonexistentDomain {
                domain: permuted.tag.clone(),
                base: permuted.permutes_domain.clone(),
            },
        ));
    };

    debug!(
        domain = %permuted.tag,
        base = %base.tag(),
        excluded = permuted.excluded_types.len(),
        permuted_sums = permuted.permuted_sums.len(),
        included = permuted.included_types.len(),
        "resolving permutation"
    );

    let mut working: Vec<Type> = base.types().cloned().collect();

    apply_exclusions(permuted, base.tag(), &mut working)?;
    for edit in &permuted.permuted_sums {
        apply_sum_edit(&permuted.tag, edit, &mut working)?;
    }
    working.extend(permuted.included_types.iter().cloned());

    let user_types = working.into_iter().filter(|t| !t.is_builtin()).collect();
    Ok(TypeDomain::new(
        permuted.tag.clone(),
        user_types,
        permuted.meta.clone(),
    ))
}

/// `base` names the domain the working list was copied from.
fn apply_exclusions(
    permuted: &PermutedDomain,
    base: &str,
    working: &mut Vec<Type>,
) -> Result<(), SemanticError> {
    for tag in &permuted.excluded_types {
        let matches: Vec<usize> = working
            .iter()
            .enumerate()
            .filter(|(_, t)| t.tag() == tag)
            .map(|(i, _)| i)
            .collect();

        if matches.iter().any(|&i| working[i].is_builtin()) {
            return Err(SemanticError::at(
                &permuted.meta,
                SemanticErrorKind::CannotRemoveBuiltinType {
                    domain: permuted.tag.clone(),
                    tag: tag.clone(),
                },
            ));
        }

        let Some(&index) = matches.first() else {
            return Err(SemanticError::at(
                &permuted.meta,
                SemanticErrorKind::CannotRemoveNonexistentType {
                    domain: permuted.tag.clone(),
                    tag: tag.clone(),
                },
            ));
        };
        invariants::ensure_unique_match(base, tag, matches.len(), &permuted.meta);

        trace!(domain = %permuted.tag, %tag, "excluded type");
        working.remove(index);
    }
    Ok(())
}

fn apply_sum_edit(
    domain: &str,
    edit: &PermutedSum,
    working: &mut [Type],
) -> Result<(), SemanticError> {
    let Some(index) = working.iter().position(|t| t.tag() == edit.tag) else {
        return Err(SemanticError::at(
            &edit.meta,
            SemanticErrorKind::CannotPermuteNonexistentSum {
                domain: domain.to_string(),
                tag: edit.tag.clone(),
            },
        ));
    };

    let Type::Sum(sum) = &working[index] else {
        return Err(SemanticError::at(
            &edit.meta,
            SemanticErrorKind::CannotPermuteNonSumType {
                domain: domain.to_string(),
                tag: edit.tag.clone(),
                kind: working[index].kind(),
            },
        ));
    };

    let permuted = permute_variants(domain, sum, edit)?;
    trace!(
        %domain,
        sum = %edit.tag,
        removed = edit.removed_variants.len(),
        added = edit.added_variants.len(),
        "permuted sum"
    );
    working[index] = Type::Sum(permuted);
    Ok(())
}

fn permute_variants(
    domain: &str,
    sum: &SumType,
    edit: &PermutedSum,
) -> Result<SumType, SemanticError> {
    let mut variants = sum.variants.clone();

    for removed in &edit.removed_variants {
        let Some(index) = variants.iter().position(|v| &v.tag == removed) else {
            return Err(SemanticError::at(
                &edit.meta,
                SemanticErrorKind::CannotRemoveNonexistentSumVariant {
                    domain: domain.to_string(),
                    sum: edit.tag.clone(),
                    variant: removed.clone(),
                },
            ));
        };
        variants.remove(index);
    }
    variants.extend(edit.added_variants.iter().cloned());

    Ok(sum.clone().with_variants(variants))
}
