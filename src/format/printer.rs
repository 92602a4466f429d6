//! Swift printer
//!
//! Renders the declaration tree to Swift source text. The printer makes no semantic decisions: everything
//! it prints is already decided by the tree, it only chooses layout (indentation, blank lines, initializer
//! parameter wrapping) according to [`FormatConfig`].

use stringgen_core::lang::swift_keywords::escape_identifier;

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::backend::ir::{
    CallArg, Decl, DeclKind, Expr, IfConfig, MemberItem, Param, Pattern, PropertyBody, SourceFile, Stmt, SwiftType,
};
use crate::model::AccessLevel;

/// Renders declaration trees as Swift source
#[derive(Debug, Clone, Default)]
pub struct SwiftPrinter {
    config: FormatConfig,
}

impl SwiftPrinter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Print one declaration, ending with a newline
    pub fn print_decl(&self, decl: &Decl) -> String {
        let mut w = FormatWriter::new(self.config.clone());
        self.decl(&mut w, decl);
        w.finish()
    }

    /// Print a whole source file: header comment, imports, then declarations separated by blank lines
    pub fn print_source_file(&self, file: &SourceFile) -> String {
        let mut w = FormatWriter::new(self.config.clone());
        for line in &file.header_comment {
            w.line_comment(line);
        }
        if !file.header_comment.is_empty() {
            w.newline();
        }
        for module in &file.imports {
            w.writeln(&format!("import {}", module));
        }
        if !file.imports.is_empty() {
            w.newline();
        }
        for (i, item) in file.items.iter().enumerate() {
            if i > 0 {
                w.newline();
            }
            self.decl(&mut w, item);
        }
        w.finish()
    }

    /// Print an expression on a single line
    pub fn print_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        write_expr(&mut out, expr);
        out
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn decl(&self, w: &mut FormatWriter, decl: &Decl) {
        if let Some(doc) = &decl.doc {
            w.doc_comment(doc);
        }
        if let Some(arguments) = decl.availability.arguments() {
            w.writeln(&format!("@available({})", arguments));
        }
        let access = access_prefix(decl.access);

        match &decl.kind {
            DeclKind::Struct(s) => {
                w.writeln(&format!(
                    "{}struct {}{} {{",
                    access,
                    escape_identifier(&s.name),
                    conformance_clause(&s.conformances)
                ));
                self.members(w, &s.members);
                w.writeln("}");
            }
            DeclKind::Class(c) => {
                w.writeln(&format!("{}class {} {{", access, escape_identifier(&c.name)));
                self.members(w, &c.members);
                w.writeln("}");
            }
            DeclKind::Enum(e) => {
                w.writeln(&format!(
                    "{}enum {}{} {{",
                    access,
                    escape_identifier(&e.name),
                    conformance_clause(&e.conformances)
                ));
                w.indent();
                for case in &e.cases {
                    if case.associated.is_empty() {
                        w.writeln(&format!("case {}", escape_identifier(&case.name)));
                    } else {
                        w.writeln(&format!(
                            "case {}({})",
                            escape_identifier(&case.name),
                            join_types(&case.associated)
                        ));
                    }
                }
                w.dedent();
                w.writeln("}");
            }
            DeclKind::Property(p) => match &p.body {
                PropertyBody::Stored => {
                    w.writeln(&format!("{}let {}: {}", access, escape_identifier(&p.name), p.ty));
                }
                PropertyBody::Computed(body) => {
                    w.writeln(&format!("{}var {}: {} {{", access, escape_identifier(&p.name), p.ty));
                    self.block(w, body);
                    w.writeln("}");
                }
            },
            DeclKind::Initializer(init) => {
                if init.params.is_empty() {
                    w.writeln(&format!("{}init() {{", access));
                } else if self.config.multiline_initializer {
                    w.writeln(&format!("{}init(", access));
                    w.indent();
                    let last = init.params.len() - 1;
                    for (i, param) in init.params.iter().enumerate() {
                        let sep = if i == last { "" } else { "," };
                        w.writeln(&format!("{}{}", param_str(param), sep));
                    }
                    w.dedent();
                    w.writeln(") {");
                } else {
                    w.writeln(&format!("{}init({}) {{", access, param_list(&init.params)));
                }
                self.block(w, &init.body);
                w.writeln("}");
            }
            DeclKind::Function(f) => {
                let ret = f
                    .return_type
                    .as_ref()
                    .map(|ty| format!(" -> {}", ty))
                    .unwrap_or_default();
                w.writeln(&format!(
                    "{}func {}({}){} {{",
                    access,
                    escape_identifier(&f.name),
                    param_list(&f.params),
                    ret
                ));
                self.block(w, &f.body);
                w.writeln("}");
            }
            DeclKind::Extension(e) => {
                w.writeln(&format!("{}extension {} {{", access, e.extended));
                self.members(w, &e.members);
                w.writeln("}");
            }
        }
    }

    fn members(&self, w: &mut FormatWriter, members: &[MemberItem]) {
        w.indent();
        for (i, member) in members.iter().enumerate() {
            if i > 0 && self.config.blank_line_between_members && !both_stored(&members[i - 1], member) {
                w.newline();
            }
            match member {
                MemberItem::Always(decl) => self.decl(w, decl),
                MemberItem::IncludedIf(block) => self.if_config(w, block, |w, decl| self.decl(w, decl)),
            }
        }
        w.dedent();
    }

    fn if_config<T>(&self, w: &mut FormatWriter, block: &IfConfig<T>, mut item: impl FnMut(&mut FormatWriter, &T)) {
        w.writeln(&format!("#if {}", block.condition));
        for entry in &block.then_items {
            item(w, entry);
        }
        if !block.else_items.is_empty() {
            w.writeln("#else");
            for entry in &block.else_items {
                item(w, entry);
            }
        }
        w.writeln("#endif");
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn block(&self, w: &mut FormatWriter, body: &[Stmt]) {
        w.indent();
        for stmt in body {
            self.stmt(w, stmt);
        }
        w.dedent();
    }

    fn stmt(&self, w: &mut FormatWriter, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => w.writeln(&self.print_expr(expr)),
            Stmt::Binding {
                mutability,
                name,
                value,
            } => w.writeln(&format!(
                "{} {} = {}",
                mutability.keyword(),
                escape_identifier(name),
                self.print_expr(value)
            )),
            Stmt::Assign { target, value } => {
                w.writeln(&format!("{} = {}", self.print_expr(target), self.print_expr(value)));
            }
            Stmt::Return(expr) => w.writeln(&format!("return {}", self.print_expr(expr))),
            Stmt::For {
                binding,
                iterable,
                body,
            } => {
                w.writeln(&format!(
                    "for {} in {} {{",
                    escape_identifier(binding),
                    self.print_expr(iterable)
                ));
                self.block(w, body);
                w.writeln("}");
            }
            Stmt::Switch { subject, cases } => {
                w.writeln(&format!("switch {} {{", self.print_expr(subject)));
                for case in cases {
                    w.writeln(&format!("case {}:", pattern_str(&case.pattern)));
                    self.block(w, &case.body);
                }
                w.writeln("}");
            }
            Stmt::IfConfig(block) => self.if_config(w, block, |w, stmt| self.stmt(w, stmt)),
        }
    }
}

fn both_stored(prev: &MemberItem, next: &MemberItem) -> bool {
    let stored = |m: &MemberItem| {
        matches!(
            m.as_decl().map(|d| &d.kind),
            Some(DeclKind::Property(p)) if p.is_stored()
        )
    };
    stored(prev) && stored(next)
}

fn access_prefix(access: AccessLevel) -> String {
    access.keyword().map(|kw| format!("{} ", kw)).unwrap_or_default()
}

fn conformance_clause(conformances: &[String]) -> String {
    if conformances.is_empty() {
        String::new()
    } else {
        format!(": {}", conformances.join(", "))
    }
}

fn join_types(types: &[SwiftType]) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn param_str(param: &Param) -> String {
    format!("{}: {}", escape_identifier(&param.name), param.ty)
}

fn param_list(params: &[Param]) -> String {
    params.iter().map(param_str).collect::<Vec<_>>().join(", ")
}

fn pattern_str(pattern: &Pattern) -> String {
    match pattern {
        Pattern::EnumCase { case_name, bindings } if bindings.is_empty() => format!(".{}", case_name),
        Pattern::EnumCase { case_name, bindings } => {
            let bound: Vec<String> = bindings
                .iter()
                .map(|b| format!("let {}", escape_identifier(b)))
                .collect();
            format!(".{}({})", case_name, bound.join(", "))
        }
    }
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Ident(name) => out.push_str(&escape_identifier(name)),
        Expr::SelfRef => out.push_str("self"),
        Expr::Type(ty) => out.push_str(&ty.to_string()),
        Expr::Member { base, name } => {
            if let Some(base) = base {
                write_expr(out, base);
            }
            out.push('.');
            out.push_str(name);
        }
        Expr::FunctionRef { base, name, labels } => {
            write_expr(out, base);
            out.push('.');
            out.push_str(name);
            out.push('(');
            for label in labels {
                out.push_str(label);
                out.push(':');
            }
            out.push(')');
        }
        Expr::StringLiteral(value) => out.push_str(&string_literal(value)),
        Expr::IntLiteral(value) => out.push_str(&value.to_string()),
        Expr::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, element);
            }
            out.push(']');
        }
        Expr::Call { callee, args } => {
            write_expr(out, callee);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_call_arg(out, arg);
            }
            out.push(')');
        }
        Expr::Infix { lhs, op, rhs } => {
            write_expr(out, lhs);
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            write_expr(out, rhs);
        }
    }
}

fn write_call_arg(out: &mut String, arg: &CallArg) {
    if let Some(label) = &arg.label {
        out.push_str(label);
        out.push_str(": ");
    }
    write_expr(out, &arg.value);
}

/// Quote a Swift string literal
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
