use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::default();

        collector.collect_translator_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        (!collector.hints.is_empty()).then_some(collector.hints)
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_translator_hints(&mut self, err: &Error) {
        use mmic_translator::Error as TransError;

        let Some(trans_err) = err.chain().find_map(|e| e.downcast_ref::<TransError>()) else {
            return;
        };

        self.has_typed_hints = true;

        match trans_err {
            TransError::NotFound { known, .. } => {
                self.add("The translator is not listed in the registry");
                if known.is_empty() {
                    self.add("The registry is empty; add [[registry]] entries to the config");
                } else {
                    self.add(format!("Registered translators: {}", known));
                }
            }

            TransError::Resolution(_) => {
                self.add("No registry entry wraps this toolkit");
                self.add("Add a [[registry]] entry pairing a plugin with the toolkit");
            }

            TransError::PluginLoad { plugin, .. } => {
                self.add(format!("'{}' is reported as installed but cannot be loaded", plugin));
                self.add("Reinstall the plugin or remove its [environment.plugins] entry");
            }

            TransError::Environment { name, .. } => {
                self.add(format!("Could not determine whether '{}' is available", name));
                self.add("Check the environment section of the configuration");
            }

            TransError::DuplicatePlugin(plugin) => {
                self.add(format!("'{}' appears in more than one [[registry]] entry", plugin));
                self.add("Each plugin identifier may be registered only once");
            }

            TransError::Config(_) => {
                self.add("The configuration file is not valid TOML for mmtrans");
                self.add("Allowed top-level keys: priority, registry, environment");
                self.add("Axis names look like mol-read, ff-write, traj-read");
            }

            TransError::UnknownAxis(_) => {
                self.add("Valid axes: mol-read, mol-write, ff-read, ff-write, traj-read, traj-write");
            }

            TransError::UnknownModel(_) => {
                self.add("Valid model kinds: Molecule, ForceField, Trajectory");
            }

            TransError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            TransError::Validation(_)
            | TransError::MutualExclusion
            | TransError::Parse { .. }
            | TransError::Write { .. }
            | TransError::SchemaMismatch { .. }
            | TransError::Conversion(_) => {
                self.add("The translator rejected the data it was given");
                self.add("Run with -v for the translator's log output");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the --config path or the MMTRANS_CONFIG variable");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check the file path and permissions");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no installed translator") {
            if msg.contains("no translator declares") {
                self.add("Nothing installed declares this axis");
                self.add("Run `mmtrans plugins` to see what is installed");
            } else {
                self.add("Use `mmtrans maps <axis>` to list the declared extensions");
            }
            return;
        }

        if msg.contains("extension") {
            self.add("Pass a bare extension (pdb) or a file name with one (input.pdb)");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
