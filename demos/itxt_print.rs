//! Prints the `iTXt` entries of PNG files.
//!
//! `cargo run --example itxt_print -- [--set key=value]... FILE...`
//!
//! With one or more `--set` arguments each file is rewritten with those
//! entries changed.

use png_itxt::ItxtStore;

fn main() {
  env_logger::init();
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");

  let mut sets: Vec<(String, String)> = Vec::new();
  let mut files: Vec<&str> = Vec::new();
  let mut it = args[1..].iter();
  while let Some(arg) = it.next() {
    if arg == "--set" {
      match it.next().and_then(|kv| kv.split_once('=')) {
        Some((k, v)) => sets.push((k.to_string(), v.to_string())),
        None => {
          println!("`--set` needs a `key=value` argument");
          return;
        }
      }
    } else {
      files.push(arg);
    }
  }

  for file_arg in files {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let store = match std::fs::read(path).map_err(png_itxt::ItxtError::from).and_then(|bytes| {
      println!("got {} bytes.", bytes.len());
      ItxtStore::from_png_bytes(&bytes)
    }) {
      Ok(store) => store,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    let mut entries: Vec<_> = store.get_all().into_iter().collect();
    entries.sort();
    for (key, value) in entries {
      println!("{key} ---- {}", String::from_utf8_lossy(&value));
    }
    if sets.is_empty() {
      continue;
    }
    for (k, v) in &sets {
      store.set(k.as_str(), v.as_str());
    }
    match store.to_png_bytes().and_then(|out| Ok(std::fs::write(path, out)?)) {
      Ok(()) => println!("Wrote `{}`.", path.display()),
      Err(e) => println!("Error writing `{}`: {e}", path.display()),
    }
  }
}
