use anyhow::{bail, Context, Result};
use lattice_loops::{render::GridLayout, search::Search, Point};

fn main() -> Result<()> {
    let mut n = None;
    let mut svg_path = None;
    let mut json_path = None;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--svg" => svg_path = Some(args.next().context("--svg needs a file path")?),
            "--json" => json_path = Some(args.next().context("--json needs a file path")?),
            _ if n.is_none() => {
                let half: usize = arg
                    .parse()
                    .with_context(|| format!("invalid half-length {:?}", arg))?;
                n = Some(half);
            }
            _ => bail!("unexpected argument {:?}", arg),
        }
    }
    let n = n.context("usage: lattice-loops <n> [--svg FILE] [--json FILE]")?;

    let mut search = Search::new(n);
    search.run();

    println!(
        "n={}: {} closed walks of length {}, {} expansions",
        n,
        search.solutions().len(),
        search.path_len(),
        search.visited()
    );
    println!("Search took {}ms", search.elapsed().as_millis());
    for walk in search.solutions() {
        println!("- {}", format_walk(walk));
    }

    if let Some(path) = json_path {
        let text = serde_json::to_string_pretty(search.solutions())?;
        std::fs::write(path, text).with_context(|| format!("failed to write {}", path))?;
    }
    if let Some(path) = svg_path {
        let svg = GridLayout::default().to_svg(search.solutions());
        std::fs::write(path, svg).with_context(|| format!("failed to write {}", path))?;
    }

    Ok(())
}

fn format_walk(walk: &[Point]) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    for (i, p) in walk.iter().enumerate() {
        if i != 0 {
            out.push_str(" -> ");
        }
        write!(&mut out, "({},{})", p.x, p.y).unwrap();
    }
    out
}
