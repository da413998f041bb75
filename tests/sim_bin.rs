use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["player_shots"].as_u64().unwrap() >= 1);
}

#[test]
fn sim_binary_small_board() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7", "--size", "5", "--max-ship", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let winner = v["winner"].as_str().unwrap();
    assert!(winner == "player" || winner == "opponent");
}
