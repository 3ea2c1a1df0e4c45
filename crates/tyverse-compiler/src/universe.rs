//! Resolution of a whole declaration list.
//!
//! Plain domains are validated and published first. Permutations follow in
//! dependency order: a permutation waits until the domain it permutes is
//! published, regardless of where it appears in the list. Transform deltas
//! are computed last, on published domains only.
//!
//! A failing declaration is rejected and reported; resolution carries on with
//! the rest. Declarations that depend on a rejected domain are skipped without
//! a second report.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};
use tyverse_core::Meta;

use crate::analyze::validate_domain;
use crate::declaration::{Declaration, TransformRequest};
use crate::diagnostics::{Diagnostics, ValidationError, ValidationErrorKind};
use crate::domain::TypeDomain;
use crate::permute::{DomainMap, PermutedDomain, compute_permutation};

/// A computed transform: the source domain annotated with what does not
/// survive into the destination.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Transform {
    pub name: String,
    pub source_domain: String,
    pub destination_domain: String,
    pub delta: TypeDomain,
    pub meta: Meta,
}

/// Every domain and transform that resolved successfully.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Universe {
    domains: DomainMap,
    transforms: Vec<Transform>,
}

impl Universe {
    pub fn resolve(declarations: Vec<Declaration>) -> (Universe, Diagnostics) {
        let mut resolver = Resolver::default();

        let mut permutations = Vec::new();
        let mut requests = Vec::new();
        for decl in declarations {
            trace!(name = decl.name(), at = %decl.meta().location(), "declaration");
            match decl {
                Declaration::Domain(domain) => resolver.publish(domain),
                Declaration::Permutation(p) => permutations.push(p),
                Declaration::Transform(t) => requests.push(t),
            }
        }

        resolver.resolve_permutations(permutations);
        for request in &requests {
            resolver.resolve_transform(request);
        }

        debug!(
            domains = resolver.universe.domains.len(),
            transforms = resolver.universe.transforms.len(),
            rejected = resolver.rejected.len(),
            diagnostics = resolver.diagnostics.len(),
            "resolved universe"
        );
        (resolver.universe, resolver.diagnostics)
    }

    pub fn domain(&self, tag: &str) -> Option<&TypeDomain> {
        self.domains.get(tag)
    }

    /// Published domains in publication order.
    pub fn domains(&self) -> impl Iterator<Item = &TypeDomain> {
        self.domains.values()
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn transform(&self, name: &str) -> Option<&Transform> {
        self.transforms.iter().find(|t| t.name == name)
    }
}

#[derive(Default)]
struct Resolver {
    universe: Universe,
    rejected: HashSet<String>,
    diagnostics: Diagnostics,
}

impl Resolver {
    /// Validate and publish, or reject.
    fn publish(&mut self, domain: TypeDomain) {
        if self.universe.domains.contains_key(domain.tag()) || self.rejected.contains(domain.tag())
        {
            self.diagnostics.push(ValidationError::at(
                domain.meta(),
                ValidationErrorKind::DuplicateDomain {
                    domain: domain.tag().to_string(),
                },
            ));
            return;
        }

        let errors = validate_domain(&domain);
        if !errors.is_empty() {
            warn!(domain = domain.tag(), errors = errors.len(), "rejected domain");
            self.rejected.insert(domain.tag().to_string());
            self.diagnostics.extend(errors.into_iter().map(Into::into));
            return;
        }

        debug!(domain = domain.tag(), types = domain.user_types().len(), "published domain");
        self.universe
            .domains
            .insert(domain.tag().to_string(), domain);
    }

    fn resolve_permutations(&mut self, mut pending: Vec<PermutedDomain>) {
        loop {
            let (ready, waiting): (Vec<_>, Vec<_>) = pending.into_iter().partition(|p| {
                self.universe.domains.contains_key(&p.permutes_domain)
                    || self.rejected.contains(&p.permutes_domain)
            });
            pending = waiting;

            if ready.is_empty() {
                break;
            }

            for permuted in ready {
                if self.rejected.contains(&permuted.permutes_domain) {
                    debug!(
                        domain = %permuted.tag,
                        base = %permuted.permutes_domain,
                        "skipped permutation of rejected domain"
                    );
                    self.rejected.insert(permuted.tag.clone());
                    continue;
                }

                match compute_permutation(&permuted, &self.universe.domains) {
                    Ok(domain) => self.publish(domain),
                    Err(err) => {
                        warn!(domain = %permuted.tag, "rejected permutation");
                        self.rejected.insert(permuted.tag.clone());
                        self.diagnostics.push(err);
                    }
                }
            }
        }

        // Whatever is left waits on a domain that is never published. Report
        // the permutations whose base is missing and every member of a cycle;
        // the rest only wait on those and are skipped.
        let bases: HashMap<&str, &str> = pending
            .iter()
            .map(|p| (p.tag.as_str(), p.permutes_domain.as_str()))
            .collect();
        for permuted in &pending {
            let reported = !bases.contains_key(permuted.permutes_domain.as_str())
                || in_cycle(&permuted.tag, &bases);
            self.rejected.insert(permuted.tag.clone());

            if !reported {
                debug!(
                    domain = %permuted.tag,
                    base = %permuted.permutes_domain,
                    "skipped permutation of unresolved domain"
                );
                continue;
            }
            if let Err(err) = compute_permutation(permuted, &self.universe.domains) {
                self.diagnostics.push(err);
            }
        }
    }

    fn resolve_transform(&mut self, request: &TransformRequest) {
        let domains = &self.universe.domains;
        if let (Some(source), Some(destination)) = (
            domains.get(&request.source_domain),
            domains.get(&request.destination_domain),
        ) {
            let delta = source.compute_transform(destination);
            self.universe.transforms.push(Transform {
                name: request.name.clone(),
                source_domain: request.source_domain.clone(),
                destination_domain: request.destination_domain.clone(),
                delta,
                meta: request.meta.clone(),
            });
            return;
        }

        let mut missing = vec![&request.source_domain];
        if request.destination_domain != request.source_domain {
            missing.push(&request.destination_domain);
        }
        for tag in missing {
            if self.universe.domains.contains_key(tag) || self.rejected.contains(tag) {
                continue;
            }
            self.diagnostics.push(ValidationError::at(
                &request.meta,
                ValidationErrorKind::UndefinedDomain {
                    transform: request.name.clone(),
                    domain: tag.clone(),
                },
            ));
        }
    }
}

/// Whether following `permutes_domain` links from `tag` leads back to it.
fn in_cycle(tag: &str, bases: &HashMap<&str, &str>) -> bool {
    let mut current = tag;
    for _ in 0..bases.len() {
        match bases.get(current) {
            Some(&base) if base == tag => return true,
            Some(&base) => current = base,
            None => return false,
        }
    }
    false
}
