use png_itxt::{
  png::{scan_png, PNG_SIGNATURE},
  ItxtError, ItxtStore,
};
use walkdir::WalkDir;

const TINY_ITXT: &[u8] = include_bytes!("tiny_itxt.png");

#[test]
fn test_ItxtStore_no_panics() {
  // scan ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if !entry.file_type().is_file() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let is_png = entry.path().extension().is_some_and(|ext| ext == "png");
    match ItxtStore::from_png_bytes(&v) {
      Ok(store) => {
        assert!(is_png, "{} scanned as a PNG", entry.path().display());
        store.to_png_bytes().unwrap();
      }
      Err(e) => assert!(!is_png, "{}: {e}", entry.path().display()),
    }
  }
  // even totally random data should never panic the scan!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = ItxtStore::from_png_bytes(&v);
    let mut with_sig = PNG_SIGNATURE.to_vec();
    with_sig.extend(v);
    let _ = ItxtStore::from_png_bytes(&with_sig);
  }
}

#[test]
fn test_tiny_itxt_fixture() {
  let _ = env_logger::builder().is_test(true).try_init();
  let store = ItxtStore::from_png_bytes(TINY_ITXT).unwrap();
  assert_eq!(store.len(), 2);
  assert_eq!(store.get("Title").as_deref(), Some(&b"tiny test image"[..]));
  assert_eq!(store.get("Comment").as_deref(), Some(&b"one gray pixel"[..]));
  assert_eq!(store.end_bytes(), b"\0\0\0\0IEND\xAEB`\x82");
  assert_eq!(store.start_bytes().len(), TINY_ITXT.len() - 12 - (12 + 25) - (12 + 26));
}

#[test]
fn test_tiny_itxt_edit_cycle() {
  let store = ItxtStore::from_png_bytes(TINY_ITXT).unwrap();
  store.set("time", "2026-10-19T00:00:00Z");
  store.delete("Comment");

  let mut out = Vec::new();
  store.write_to(&mut out).unwrap();
  let scan = scan_png(out.as_slice()).unwrap();
  assert_eq!(scan.start, store.start_bytes());
  assert_eq!(scan.end, store.end_bytes());
  assert_eq!(scan.itxt.len(), 2);
  assert_eq!(scan.itxt["time"], b"2026-10-19T00:00:00Z");
  assert_eq!(scan.itxt["Title"], b"tiny test image");
}

#[test]
fn test_tiny_itxt_damage() {
  let mut bad = TINY_ITXT.to_vec();
  // the IHDR width
  bad[PNG_SIGNATURE.len() + 8] ^= 0x01;
  assert!(matches!(ItxtStore::from_png_bytes(&bad), Err(ItxtError::Crc32Mismatch { .. })));
}
