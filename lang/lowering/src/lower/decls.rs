use mibc_lang_parser::cst::{self, Decl, Status};

use crate::defval;
use crate::ir;
use crate::symbol_table::SymbolKind;
use crate::types::ResolvedType;

use super::{Ctx, Lower};

// Module header
//
//

impl Lower for cst::Import {
    type Target = ir::Import;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        let cst::Import { module, symbols, .. } = self;
        ir::Import { module: module.lower(ctx), symbols: symbols.lower(ctx) }
    }
}

impl Lower for cst::Revision {
    type Target = ir::Revision;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        let cst::Revision { date, description } = self;
        ir::Revision { date: date.clone(), description: ctx.text(Some(description)) }
    }
}

// Declarations
//
//

impl Lower for Decl {
    type Target = ir::Decl;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        let name = self.name();
        let kind = ctx.lookup(name).map_or(SymbolKind::Unknown, |symbol| symbol.kind);
        let mut decl = ir::Decl::new(name.lower(ctx), kind);
        decl.oid = ctx.oid(name);

        match self {
            Decl::Value(_) | Decl::Macro(_) => {}
            Decl::Type(_) => decl.syntax = ctx.syntax(name),
            Decl::TextualConvention(d) => {
                decl.syntax = ctx.syntax(name);
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::ModuleIdentity(d) => decl.description = ctx.text(Some(&d.description)),
            Decl::ObjectIdentity(d) => {
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::ObjectType(d) => object_type(&mut decl, d, ctx),
            Decl::Notification(d) => {
                decl.objects = d.objects.lower(ctx);
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::Trap(d) => {
                decl.objects = d.variables.lower(ctx);
                decl.description = ctx.text(d.description.as_deref());
                decl.reference = ctx.text(d.reference.as_deref());
            }
            Decl::ObjectGroup(d) => {
                decl.objects = d.objects.lower(ctx);
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::NotificationGroup(d) => {
                decl.objects = d.notifications.lower(ctx);
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::ModuleCompliance(d) => {
                decl.objects = d
                    .modules
                    .iter()
                    .flat_map(|m| m.mandatory_groups.iter().chain(m.groups.iter().map(|g| &g.name)))
                    .map(|name| name.lower(ctx))
                    .collect();
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
            Decl::AgentCapabilities(d) => {
                decl.objects = d
                    .supports
                    .iter()
                    .flat_map(|s| &s.includes)
                    .map(|name| name.lower(ctx))
                    .collect();
                document(
                    &mut decl,
                    ctx,
                    d.status,
                    d.description.as_deref(),
                    d.reference.as_deref(),
                );
            }
        }

        decl.display_hint = decl.syntax.as_ref().and_then(|ty| ty.display_hint.clone());
        decl
    }
}

fn document(
    decl: &mut ir::Decl,
    ctx: &Ctx,
    status: Status,
    description: Option<&str>,
    reference: Option<&str>,
) {
    decl.status = Some(status.to_string());
    decl.description = ctx.text(description);
    decl.reference = ctx.text(reference);
}

fn object_type(decl: &mut ir::Decl, d: &cst::ObjectType, ctx: &Ctx) {
    let syntax = ctx.syntax(&d.name).unwrap_or_else(ResolvedType::unknown);

    decl.access = d.access.map(|access| access.to_string());
    decl.units = d.units.clone();
    match &d.index {
        Some(cst::IndexClause::Index(items)) => decl.index = items.lower(ctx),
        Some(cst::IndexClause::Augments(target)) => decl.augments = Some(target.lower(ctx)),
        None => {}
    }
    decl.defval = d.defval.as_ref().map(|defval| {
        let value = defval::resolve(&defval.value, &syntax, ctx.table);
        if !value.is_value() {
            log::debug!("DEFVAL of {} is not a value of its syntax", d.name);
        }
        value
    });
    decl.syntax = Some(syntax);
    document(decl, ctx, d.status, d.description.as_deref(), d.reference.as_deref());
}

impl Lower for cst::IndexItem {
    type Target = ir::IndexPart;

    fn lower(&self, ctx: &Ctx) -> Self::Target {
        match self {
            cst::IndexItem::Object { implied, name } => {
                ir::IndexPart::Object { name: name.lower(ctx), implied: *implied }
            }
            cst::IndexItem::Type(syntax) => ir::IndexPart::Type(ctx.table.resolve_syntax(syntax)),
        }
    }
}
