//! Extract command.
//!
//! Walks a source tree, parses every Rust file, and collects the first
//! string-literal argument of each `t`/`f`/`s`/`p` translation call.
//! Keys are derived the same way the library derives them, so the
//! generated dictionary lines up with runtime lookups.
//!
//! Files that fail to parse are skipped; one bad file never fails the
//! whole run.

use crate::error::{CliError, CliResult};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use syn::visit::Visit;
use traduki::{DEFAULT_DICTIONARY, DEFAULT_FOLDER, Meta, TranslationFile, normalize, slugify};
use walkdir::WalkDir;

/// Translation function names recognized in call expressions.
const TRANSLATION_FNS: &[&str] = &["t", "f", "s", "p"];

/// Extract command entry point.
pub fn execute(source_dir: &Path, locale: &str, output: Option<&Path>) -> CliResult<()> {
    if !source_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "not a directory: {}",
            source_dir.display()
        )));
    }

    let mut entries = BTreeMap::new();

    for entry in WalkDir::new(source_dir).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        let Ok(ast) = syn::parse_file(&content) else {
            continue;
        };
        let mut scanner = CallScanner {
            path,
            entries: &mut entries,
        };
        scanner.visit_file(&ast);
    }

    if entries.is_empty() {
        println!("no translation calls found");
        return Ok(());
    }

    let output: PathBuf = output.map_or_else(
        || Path::new(DEFAULT_FOLDER).join(format!("{DEFAULT_DICTIONARY}.{locale}.json")),
        Path::to_path_buf,
    );
    if let Some(dir) = output.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let count = entries.len();
    let file = TranslationFile {
        meta: Meta {
            lang: locale.to_string(),
            name: DEFAULT_DICTIONARY.to_string(),
            updated: Some(chrono::Utc::now().format("%Y-%m-%d").to_string()),
            ..Meta::default()
        },
        translations: entries,
    };
    // Catches bad locale codes as well as any degenerate entries.
    file.validate()?;

    fs::write(&output, serde_json::to_string_pretty(&file)?)?;
    println!(
        "{} Extracted {} entries → {}",
        "✅",
        count.to_string().bold(),
        output.display()
    );
    Ok(())
}

/// AST visitor collecting translation-call string literals.
struct CallScanner<'a> {
    path: &'a Path,
    entries: &'a mut BTreeMap<String, String>,
}

impl CallScanner<'_> {
    fn record(&mut self, func: &str, text: &str) {
        let key = slugify(text);
        if key.is_empty() {
            return;
        }
        let (template, _) = normalize(text);
        println!(
            "{} {}({:?}) → key: {}",
            format!("[{}]", self.path.display()).dimmed(),
            func,
            text,
            key.cyan()
        );
        self.entries.insert(key, template);
    }
}

/// First argument as a plain string literal, if it is one.
fn string_literal(expr: Option<&syn::Expr>) -> Option<String> {
    if let Some(syn::Expr::Lit(lit)) = expr
        && let syn::Lit::Str(s) = &lit.lit
    {
        Some(s.value())
    } else {
        None
    }
}

impl<'ast> Visit<'ast> for CallScanner<'_> {
    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        let method = node.method.to_string();
        if TRANSLATION_FNS.contains(&method.as_str())
            && let Some(text) = string_literal(node.args.first())
        {
            self.record(&method, &text);
        }
        syn::visit::visit_expr_method_call(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        if let syn::Expr::Path(path) = &*node.func
            && let Some(segment) = path.path.segments.last()
        {
            let name = segment.ident.to_string();
            if TRANSLATION_FNS.contains(&name.as_str())
                && let Some(text) = string_literal(node.args.first())
            {
                self.record(&name, &text);
            }
        }
        syn::visit::visit_expr_call(self, node);
    }
}
