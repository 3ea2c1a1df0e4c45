//! Indented text dump.
//!
//! One line per domain, type, variant, and field:
//!
//! ```text
//! domain v1
//!   product point positional
//!     x: int
//!   sum expr
//!     lit
//!       value: int
//!     add [removed]
//!       lhs: expr
//! ```
//!
//! Builtins are implied and never listed.

use tyverse_core::{Colors, Meta};

use crate::domain::TypeDomain;
use crate::types::{Encoding, Field, ProductType, SumType, Type};
use crate::universe::{Transform, Universe};

use super::DumpConfig;

const INDENT: &str = "  ";

pub fn dump_domain(domain: &TypeDomain, config: &DumpConfig) -> String {
    let mut dumper = Dumper::new(config);
    dumper.domain(domain);
    dumper.output
}

/// Header naming both ends, followed by the delta (the source domain with
/// removal markers).
pub fn dump_transform(transform: &Transform, config: &DumpConfig) -> String {
    let mut dumper = Dumper::new(config);
    let c = dumper.c();
    dumper.output.push_str(&format!(
        "{}transform{} {}{}{}{}:{} {}{}{} {}->{} {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        transform.name,
        c.reset,
        c.dim,
        c.reset,
        c.blue,
        transform.source_domain,
        c.reset,
        c.dim,
        c.reset,
        c.blue,
        transform.destination_domain,
        c.reset,
    ));
    dumper.suffix_meta(&transform.meta);
    dumper.output.push('\n');
    dumper.annotations(1, &transform.meta);
    dumper.domain(&transform.delta);
    dumper.output
}

/// Every published domain, separated by blank lines.
pub fn dump_universe(universe: &Universe, config: &DumpConfig) -> String {
    universe
        .domains()
        .map(|d| dump_domain(d, config))
        .collect::<Vec<_>>()
        .join("\n")
}

struct Dumper<'a> {
    config: &'a DumpConfig,
    output: String,
}

impl<'a> Dumper<'a> {
    fn new(config: &'a DumpConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    fn domain(&mut self, domain: &TypeDomain) {
        let c = self.c();
        self.output.push_str(&format!(
            "{}domain{} {}{}{}",
            c.dim,
            c.reset,
            c.blue,
            domain.tag(),
            c.reset
        ));
        self.suffix_meta(domain.meta());
        self.output.push('\n');
        self.annotations(1, domain.meta());

        for ty in domain.user_types() {
            match ty {
                Type::Builtin(_) => {}
                Type::Product(product) => self.product(1, Some("product"), product),
                Type::Sum(sum) => self.sum(1, sum),
            }
        }
    }

    fn sum(&mut self, depth: usize, sum: &SumType) {
        let c = self.c();
        self.indent(depth);
        self.output.push_str(&format!(
            "{}sum{} {}{}{}",
            c.dim, c.reset, c.blue, sum.tag, c.reset
        ));
        self.suffix_removed(sum.is_removed);
        self.suffix_meta(&sum.meta);
        self.output.push('\n');
        self.annotations(depth + 1, &sum.meta);

        for variant in &sum.variants {
            self.product(depth + 1, None, variant);
        }
    }

    /// Top-level products get a keyword; variants are bare tags.
    fn product(&mut self, depth: usize, keyword: Option<&str>, product: &ProductType) {
        let c = self.c();
        self.indent(depth);
        if let Some(keyword) = keyword {
            self.output
                .push_str(&format!("{}{}{} ", c.dim, keyword, c.reset));
        }
        self.output
            .push_str(&format!("{}{}{}", c.blue, product.tag, c.reset));
        if product.encoding == Encoding::Positional {
            self.output
                .push_str(&format!(" {}positional{}", c.dim, c.reset));
        }
        self.suffix_removed(product.is_removed);
        self.suffix_meta(&product.meta);
        self.output.push('\n');
        self.annotations(depth + 1, &product.meta);

        for field in &product.fields {
            self.field(depth + 1, field);
        }
    }

    fn field(&mut self, depth: usize, field: &Field) {
        let c = self.c();
        self.indent(depth);
        self.output.push_str(&format!(
            "{}{}:{} {}{}{}",
            field.name, c.dim, c.reset, c.green, field.ty.type_name, c.reset
        ));
        self.suffix_meta(&field.meta);
        self.output.push('\n');
        self.annotations(depth + 1, &field.meta);
    }

    fn suffix_removed(&mut self, is_removed: bool) {
        if is_removed {
            let c = self.c();
            self.output
                .push_str(&format!(" {}[removed]{}", c.red, c.reset));
        }
    }

    fn suffix_meta(&mut self, meta: &Meta) {
        if self.config.spans && meta.pos.is_known() {
            let c = self.c();
            self.output
                .push_str(&format!(" {}@{}{}", c.dim, meta.pos, c.reset));
        }
    }

    fn annotations(&mut self, depth: usize, meta: &Meta) {
        if !self.config.annotations {
            return;
        }
        let c = self.c();
        for (key, value) in &meta.annotations {
            self.indent(depth);
            self.output
                .push_str(&format!("{}# {} = {}{}\n", c.dim, key, value, c.reset));
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
    }
}
