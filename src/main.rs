fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = exterm_bridge::config::Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("extermbridge {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("extermbridge {}", env!("CARGO_PKG_VERSION"));
        println!("Clipboard bridge for cell-addressed console grids\n");
        println!("USAGE:");
        println!("    extermbridge [OPTIONS]\n");
        println!("OPTIONS:");
        println!("    --print-config    Print the default configuration to stdout");
        println!("    --version, -V     Print version information");
        println!("    --help, -h        Print this help message");
        println!("\nWithout options, walks one copy and one paste through the bridge");
        println!("over a sample grid.");
        return;
    }

    demo();
}

/// Walks one copy and one paste through the bridge over a sample grid.
fn demo() {
    use std::sync::mpsc;

    use exterm_bridge::bridge::{ConsoleBridge, Handled, InputEvent};
    use exterm_bridge::clipboard::{Clipboard as _, MemoryClipboard};
    use exterm_bridge::config::Config;
    use exterm_bridge::document::SelectionNode;
    use exterm_bridge::grid::Grid;
    use exterm_bridge::relay::ChannelRelay;
    use exterm_bridge::selection::Coordinate;

    let config = Config::default();
    let grid = Grid::from_lines(&["$ uptime", "  14:02  up 3 days", "$"]);
    let mut clipboard = MemoryClipboard::new();
    let (tx, rx) = mpsc::channel();
    let mut bridge = ConsoleBridge::new(&grid, &mut clipboard, ChannelRelay::new(tx), &config);

    if let Handled::Scroll(request) = bridge.handle(InputEvent::Mounted) {
        println!(
            "mount: scroll to ({}, {}) after {:?}",
            request.x, request.y, request.delay
        );
    }

    let anchor_id = Coordinate { row: 1, col: 1 }.cell_id();
    let focus_id = Coordinate { row: 3, col: 1 }.cell_id();
    bridge.handle(InputEvent::Copy {
        anchor: SelectionNode::Element {
            id: Some(&anchor_id),
        },
        focus: SelectionNode::Text {
            owner_id: Some(&focus_id),
        },
    });
    bridge.handle(InputEvent::Paste);
    drop(bridge);

    match clipboard.get_text() {
        Ok(text) => println!("copied:\n{text}"),
        Err(err) => println!("copy failed: {err}"),
    }
    if let Ok(pasted) = rx.try_recv() {
        println!("relayed paste: {pasted:?}");
    }
}
