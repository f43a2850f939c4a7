//! Elided lifetimes in signatures.
//!
//! Trait impls generated from a method signature cannot rely on elision,
//! so every elided or `'_` lifetime in a parameter type gets a fresh name.

use proc_macro2::Span;
use syn::visit::{self, Visit};
use syn::visit_mut::{self, VisitMut};
use syn::{Lifetime, Type, TypeReference};

/// Replaces elided lifetimes with `'__fwd0`, `'__fwd1`, ...
#[derive(Default)]
pub struct NameElided {
    pub introduced: Vec<Lifetime>,
}

impl NameElided {
    fn fresh(&mut self) -> Lifetime {
        let lifetime = Lifetime::new(&format!("'__fwd{}", self.introduced.len()), Span::call_site());
        self.introduced.push(lifetime.clone());
        lifetime
    }
}

impl VisitMut for NameElided {
    fn visit_type_reference_mut(&mut self, node: &mut TypeReference) {
        match &node.lifetime {
            None => node.lifetime = Some(self.fresh()),
            Some(lifetime) if lifetime.ident == "_" => node.lifetime = Some(self.fresh()),
            Some(_) => {}
        }
        visit_mut::visit_type_reference_mut(self, node);
    }

    fn visit_lifetime_mut(&mut self, node: &mut Lifetime) {
        if node.ident == "_" {
            *node = self.fresh();
        }
    }
}

/// `true` if `ty` borrows through an elided or `'_` lifetime.
pub fn has_elided_lifetime(ty: &Type) -> bool {
    struct Finder(bool);

    impl<'ast> Visit<'ast> for Finder {
        fn visit_type_reference(&mut self, node: &'ast TypeReference) {
            match &node.lifetime {
                None => self.0 = true,
                Some(lifetime) if lifetime.ident == "_" => self.0 = true,
                Some(_) => {}
            }
            visit::visit_type_reference(self, node);
        }

        fn visit_lifetime(&mut self, node: &'ast Lifetime) {
            if node.ident == "_" {
                self.0 = true;
            }
        }
    }

    let mut finder = Finder(false);
    finder.visit_type(ty);
    finder.0
}
