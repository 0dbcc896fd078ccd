use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let pid = std::process::id();
    let p = std::env::temp_dir().join(format!("litpack_{}_{}_{}", name, pid, nanos));
    fs::create_dir_all(&p).expect("create tmp dir");
    p
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn packs_two_files_compat_golden_bytes() {
    let dir = tmp_dir("golden_compat");
    let a = dir.join("a.txt");
    let b = dir.join("b.bin");
    let out = dir.join("packed.c");

    fs::write(&a, [0x41, 0x0A, 0x22]).expect("write a.txt");
    fs::write(&b, [0x00, 0xFF]).expect("write b.bin");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_litpack-cli"));
    cmd.args([
        "pack",
        out.to_str().unwrap(),
        "r_",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--escape",
        "compat",
    ]);
    run_ok(&mut cmd);

    let got = fs::read_to_string(&out).expect("read packed source");
    let expected = concat!(
        "static const char r_a_txt[] = \"A\\n\\x22\";\n",
        "static const char r_b_bin[] = \"\\x0\\xff\";\n",
    );
    assert_eq!(got, expected);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_escape_is_padded() {
    let dir = tmp_dir("golden_padded");
    let b = dir.join("b.bin");
    let out = dir.join("packed.c");

    fs::write(&b, [0x00, 0xFF]).expect("write b.bin");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_litpack-cli"));
    cmd.args(["pack", out.to_str().unwrap(), "r_", b.to_str().unwrap()]);
    run_ok(&mut cmd);

    let got = fs::read_to_string(&out).expect("read packed source");
    assert_eq!(got, "static const char r_b_bin[] = \"\\x00\\xff\";\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn declarations_follow_argument_order() {
    let dir = tmp_dir("golden_order");
    let z = dir.join("z.bin");
    let a = dir.join("a.bin");
    let out = dir.join("packed.c");

    fs::write(&z, b"zz").expect("write z.bin");
    fs::write(&a, b"aa").expect("write a.bin");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_litpack-cli"));
    cmd.args([
        "pack",
        out.to_str().unwrap(),
        "p_",
        z.to_str().unwrap(),
        a.to_str().unwrap(),
    ]);
    run_ok(&mut cmd);

    let got = fs::read_to_string(&out).expect("read packed source");
    let z_at = got.find("p_z_bin").expect("z declaration present");
    let a_at = got.find("p_a_bin").expect("a declaration present");
    assert!(z_at < a_at, "argument order not preserved:\n{got}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_inputs_write_an_empty_output() {
    let dir = tmp_dir("golden_empty");
    let out = dir.join("packed.c");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_litpack-cli"));
    cmd.args(["pack", out.to_str().unwrap(), "r_"]);
    run_ok(&mut cmd);

    let got = fs::read(&out).expect("read packed source");
    assert!(got.is_empty(), "expected empty output, got {} bytes", got.len());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn summary_line_reports_session_counts() {
    let dir = tmp_dir("golden_summary");
    let a = dir.join("a.txt");
    let out = dir.join("packed.c");

    fs::write(&a, [0x41, 0x0A, 0x22]).expect("write a.txt");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_litpack-cli"));
    cmd.args(["pack", out.to_str().unwrap(), "r_", a.to_str().unwrap()]);
    let stderr = run_ok(&mut cmd);

    assert!(
        stderr.contains("pack ok: inputs=1 bytes_in=3"),
        "unexpected summary:\n{stderr}"
    );
    assert!(stderr.contains("escape=padded"), "unexpected summary:\n{stderr}");

    let _ = fs::remove_dir_all(&dir);
}
