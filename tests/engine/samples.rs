#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use lectern::content;
    use lectern::dom::Page;
    use lectern::engine::{Configuration, Engine};

    #[test]
    fn ensure_samples_render() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("json")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .json files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let source = content::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = match content::parse(&file, &source) {
                Ok(document) => document,
                Err(e) => {
                    println!("File {:?} failed to parse: {}", file, e);
                    failures.push(file.clone());
                    continue;
                }
            };

            let mut engine = Engine::new(Configuration::new(), Page::new());
            engine.init(document);

            let page = engine.gateway();
            let html = page
                .content()
                .unwrap_or("");
            if html.contains("unknown-topic") || html.contains("malformed-topic") {
                println!("File {:?} rendered a placeholder", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should render without placeholders, but {} files failed",
                failures.len()
            );
        }
    }
}
