use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use num_bigint::BigUint;
use num_traits::One;
use std::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn rsagen_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rsagen"))
}

fn field(doc: &serde_json::Value, name: &str) -> BigUint {
    let hex_text = doc[name].as_str().expect("hex field");
    BigUint::from_bytes_be(&hex::decode(hex_text).expect("valid hex"))
}

#[test]
fn derives_a_consistent_key_pair_from_a_generated_stream() -> Result<(), Box<dyn Error>> {
    // A deterministic stream from the generator; three iterations over a
    // three-byte confusion string leave the needed 128 bytes with margin.
    let stream = seedstream::generate(b"rsagen-test-password", b"key", 3)?;
    assert!(
        stream.len() >= 128,
        "test stream unexpectedly short: {} bytes",
        stream.len()
    );

    let dir = tempdir()?;
    let mut child = rsagen_cmd()
        .args(["priv", "pub"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(STANDARD.encode(&stream).as_bytes())?;
    let output = child.wait_with_output()?;
    assert!(
        output.status.success(),
        "rsagen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Extension is appended to bare names
    let private_path = dir.path().join("priv.json");
    let public_path = dir.path().join("pub.json");
    assert!(private_path.exists());
    assert!(public_path.exists());

    let private: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&private_path)?)?;
    let public: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&public_path)?)?;

    let n = field(&private, "n");
    let e = field(&private, "e");
    let d = field(&private, "d");
    let p = field(&private, "p");
    let q = field(&private, "q");

    assert_eq!(e, BigUint::from(65_537u32));
    assert_eq!(n, &p * &q);

    // The private exponent inverts e modulo phi(n)
    let totient = (&p - 1u32) * (&q - 1u32);
    assert_eq!((&e * &d) % &totient, BigUint::one());

    // The public document mirrors the private one's modulus and exponent
    assert_eq!(field(&public, "n"), n);
    assert_eq!(field(&public, "e"), e);

    Ok(())
}

#[test]
fn rejects_a_stream_that_is_not_base64() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let mut child = rsagen_cmd()
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"!!! not base64 !!!")?;
    let output = child.wait_with_output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base64"));
    Ok(())
}

#[test]
fn rejects_a_stream_shorter_than_a_prime_candidate() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let mut child = rsagen_cmd()
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(STANDARD.encode([7u8; 16]).as_bytes())?;
    let output = child.wait_with_output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too short"));
    Ok(())
}
