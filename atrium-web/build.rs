use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css`, scanning the UI crate for
/// class names. Without a local tailwindcss install an empty stylesheet is
/// written instead so the asset still resolves.
fn generate_tailwind() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let tailwind_input = manifest_dir.join("tailwind.css");
    let tailwind_output = manifest_dir.join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("../atrium-ui/src").display()
    );

    let tailwind_bin = manifest_dir.join("node_modules/.bin/tailwindcss");
    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!(
                "cargo:warning=Tailwind CSS generation failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            write_placeholder(&tailwind_output);
        }
        Err(e) => {
            println!("cargo:warning=tailwindcss not available ({e}), styles will be missing");
            write_placeholder(&tailwind_output);
        }
    }
}

fn write_placeholder(path: &Path) {
    if !path.exists() {
        if let Err(e) = std::fs::write(path, "") {
            println!("cargo:warning=Could not write {}: {e}", path.display());
        }
    }
}
