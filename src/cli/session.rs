//! Interactive filter session: each command that changes the selection
//! recomputes the report against the cached catalog.
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::context::AppContext;
use super::summary::render_text;
use crate::analytics::{category_options, DashboardReport, PriceRange, ProductFilter};
use crate::export::export_to_path;

const HELP: &str = "\
comandos:
  categorias              lista as categorias disponíveis
  cat <categoria>         adiciona uma categoria ao filtro
  uncat <categoria>       remove uma categoria do filtro
  preco <min> <max>       define a faixa de preço (R$)
  limpar                  remove todos os filtros
  mostrar                 recalcula o painel
  exportar [arquivo]      exporta a tabela filtrada
  recarregar              descarta o cache e relê o arquivo
  sair";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Categories,
    AddCategory(String),
    RemoveCategory(String),
    Price(PriceRange),
    Clear,
    Show,
    Export(Option<PathBuf>),
    Reload,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim()));
    let cmd = match verb.to_lowercase().as_str() {
        "categorias" => Command::Categories,
        "cat" if !rest.is_empty() => Command::AddCategory(rest.to_string()),
        "uncat" if !rest.is_empty() => Command::RemoveCategory(rest.to_string()),
        "preco" | "preço" => {
            let bounds: Vec<f64> = rest
                .split_whitespace()
                .map(|b| b.replace(',', ".").parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| format!("faixa inválida: {rest}"))?;
            match bounds.as_slice() {
                [min, max] if min <= max => Command::Price(PriceRange::new(*min, *max)),
                _ => return Err(format!("uso: preco <min> <max> (recebido: {rest})")),
            }
        }
        "limpar" => Command::Clear,
        "mostrar" => Command::Show,
        "exportar" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "recarregar" => Command::Reload,
        "ajuda" | "help" => Command::Help,
        "sair" | "quit" | "exit" => Command::Quit,
        _ => return Err(format!("comando desconhecido: {line} (digite ajuda)")),
    };
    Ok(Some(cmd))
}

/// Drive a session from `input`, writing panels and messages to `out`.
///
/// A load failure ends the session with an error; bad commands only print a
/// message.
pub fn run<R: BufRead, W: Write>(ctx: &mut AppContext, input: R, mut out: W) -> Result<()> {
    let mut filter = ProductFilter::default();
    render(ctx, &filter, &mut out)?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };
        debug!(?cmd, "session command");

        match cmd {
            Command::Categories => {
                let catalog = ctx.catalog()?;
                for category in category_options(catalog.records()) {
                    writeln!(out, "  {category}")?;
                }
            }
            Command::AddCategory(name) => {
                let catalog = ctx.catalog()?;
                if !category_options(catalog.records()).contains(&name) {
                    warn!(category = %name, "selected category not present in catalog");
                }
                filter.categories.insert(name);
                render(ctx, &filter, &mut out)?;
            }
            Command::RemoveCategory(name) => {
                filter.categories.remove(&name);
                render(ctx, &filter, &mut out)?;
            }
            Command::Price(range) => {
                filter.price_range = Some(range);
                render(ctx, &filter, &mut out)?;
            }
            Command::Clear => {
                filter = ProductFilter::default();
                render(ctx, &filter, &mut out)?;
            }
            Command::Show => render(ctx, &filter, &mut out)?,
            Command::Export(path) => {
                let catalog = ctx.catalog()?;
                let path = path.unwrap_or_else(|| ctx.config.export_path.clone());
                let view = filter.apply(catalog.records());
                match export_to_path(catalog.columns(), &view, &path) {
                    Ok(rows) => writeln!(out, "{rows} produtos exportados para {}", path.display())?,
                    Err(e) => writeln!(out, "falha na exportação: {e}")?,
                }
            }
            Command::Reload => {
                ctx.invalidate();
                render(ctx, &filter, &mut out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn render<W: Write>(ctx: &mut AppContext, filter: &ProductFilter, out: &mut W) -> Result<()> {
    let catalog = ctx.catalog()?;
    let report = DashboardReport::build(&catalog, filter, ctx.config.top_n);
    write!(out, "{}", render_text(&report))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use std::fs;

    const CSV: &str = "product_name,category,discounted_price,actual_price,rating,rating_count\n\
        Phone,Electronics|Phones,₹1000,₹1200,4.0,100\n\
        Pan,Home&Kitchen|Cookware,₹200,₹300,3.0,50\n";

    fn context(dir: &std::path::Path) -> AppContext {
        let data_path = dir.join("catalog.csv");
        fs::write(&data_path, CSV).unwrap();
        AppContext::new(DashboardConfig {
            data_path,
            export_path: dir.join("out.csv"),
            ..DashboardConfig::default()
        })
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Ok(None));
        assert_eq!(
            parse_command("cat Casa e Cozinha"),
            Ok(Some(Command::AddCategory("Casa e Cozinha".into())))
        );
        assert_eq!(
            parse_command("preco 10 20,5"),
            Ok(Some(Command::Price(PriceRange::new(10.0, 20.5))))
        );
        assert!(parse_command("preco 20 10").is_err());
        assert!(parse_command("cat").is_err());
        assert_eq!(parse_command("exportar"), Ok(Some(Command::Export(None))));
        assert!(parse_command("voar").is_err());
    }

    #[test]
    fn each_interaction_reuses_the_cached_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let input = "cat Eletrônicos\npreco 0 100\nlimpar\nmostrar\nsair\nmostrar\n";
        let mut out = Vec::new();
        run(&mut ctx, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Produtos Listados  1"));
        assert!(text.contains("Produtos Listados  2"));
        assert_eq!(ctx.load_count(), 1);
    }

    #[test]
    fn reload_and_export_through_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(dir.path());
        let input = "recarregar\ncat Casa e Cozinha\nexportar\nfoo\n";
        let mut out = Vec::new();
        run(&mut ctx, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1 produtos exportados"));
        assert!(text.contains("comando desconhecido"));
        assert_eq!(ctx.load_count(), 2);
        let exported = fs::read_to_string(dir.path().join("out.csv")).unwrap();
        assert_eq!(exported.lines().count(), 2);
        assert!(exported.contains("Pan"));
    }

    #[test]
    fn missing_catalog_ends_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::new(DashboardConfig {
            data_path: dir.path().join("absent.csv"),
            ..DashboardConfig::default()
        });
        let mut out = Vec::new();
        assert!(run(&mut ctx, "mostrar\n".as_bytes(), &mut out).is_err());
        assert!(out.is_empty());
    }
}
