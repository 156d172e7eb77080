//! Execute a helix command, journal it, and replay the journal line
//! through a second command instance.

use helix_scene::Scene;
use helix_tool::{HelixTool, COMMAND_NAME};

fn main() {
    let mut scene = Scene::new();

    let mut tool = HelixTool::new();
    tool.parse_args(&["-r", "1.5", "-p", "0.3", "-ncv", "30", "-ud", "true"])
        .unwrap();
    tool.execute(&mut scene).unwrap();
    let journal = tool.finalize().unwrap();
    println!("journaled: {journal}");

    // A host replaying its journal re-parses everything after the name.
    let tokens: Vec<&str> = journal.split_whitespace().collect();
    assert_eq!(tokens[0], COMMAND_NAME);

    let mut replayed = HelixTool::new();
    replayed.parse_args(&tokens[1..]).unwrap();
    replayed.execute(&mut scene).unwrap();

    let a = &scene.get(tool.path().unwrap()).unwrap().curve;
    let b = &scene.get(replayed.path().unwrap()).unwrap().curve;
    assert_eq!(a, b, "replay must reproduce the original curve");
    println!("replayed {} -> identical geometry", replayed.path().unwrap());
}
