use std::io::{Write, BufWriter};
use std::path::PathBuf;
use crossterm::tty::IsTty;
use strum_macros::EnumString;
use structopt::StructOpt;
use flyweight_maze::engine::*;
use flyweight_maze::text_ui::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Demo {
    Flyweight,
    Maze,
    All,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "flyweight-maze", about = "Flyweight elements drawn into a maze block")]
struct Opt {
    /// Demonstration to run: flyweight, maze or all
    #[structopt(default_value = "all")]
    demo: Demo,

    /// Block layout to draw in the maze demo instead of the built-in one
    #[structopt(long, parse(from_os_str))]
    layout: Option<PathBuf>,

    /// Print glyphs without colours (implied when stdout is not a terminal)
    #[structopt(long)]
    plain: bool,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let opt = Opt::from_args();
    tracing::info!("running {:?} demo", opt.demo);

    let palette = Palette::standard();
    let stdout = std::io::stdout();
    let plain = opt.plain || !stdout.is_tty();
    let mut writer = BufWriter::new(stdout);

    if matches!(opt.demo, Demo::Flyweight | Demo::All) {
        flyweight_demo(&palette, &mut writer, plain)?;
    }

    if matches!(opt.demo, Demo::Maze | Demo::All) {
        let block = match &opt.layout {
            Some(path) => load_layout(path, &palette)?,
            None => Block::walled(&palette),
        };
        writeln!(writer, "Rendering maze block at {:?}", block.position())?;
        print_block(&mut writer, &block, plain)?;
    }

    writer.flush()?;
    Ok(())
}
