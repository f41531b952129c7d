//! Common test utilities for Graft integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A JavaScript project plus a local registry directory, both in a temp dir
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root (contains package.json)
    pub path: PathBuf,
    /// Local registry root (contains registry.json)
    pub registry: PathBuf,
}

impl TestProject {
    /// Create a project with package.json but without graft.json
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("app");
        let registry = temp.path().join("registry");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&registry).expect("Failed to create registry directory");
        std::fs::write(path.join("package.json"), r#"{ "name": "app" }"#)
            .expect("Failed to write package.json");
        Self {
            temp,
            path,
            registry,
        }
    }

    /// Create a project with a default graft.json
    pub fn initialized() -> Self {
        let project = Self::new();
        project.write_file(
            "graft.json",
            &serde_json::to_string_pretty(&json!({ "installDir": "src/components/ui" }))
                .expect("Failed to serialize config"),
        );
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a component file into the installed directory
    #[allow(dead_code)]
    pub fn write_installed(&self, file_name: &str, content: &str) {
        self.write_file(&format!("src/components/ui/{file_name}"), content);
    }

    /// Read a component file from the installed directory
    #[allow(dead_code)]
    pub fn read_installed(&self, file_name: &str) -> String {
        self.read_file(&format!("src/components/ui/{file_name}"))
    }

    #[allow(dead_code)]
    pub fn installed_exists(&self, file_name: &str) -> bool {
        self.file_exists(&format!("src/components/ui/{file_name}"))
    }

    /// Write registry.json with the given component entries
    pub fn write_registry(&self, components: Value) {
        let index = json!({
            "name": "test-registry",
            "version": "1.0.0",
            "components": components,
        });
        std::fs::write(
            self.registry.join("registry.json"),
            serde_json::to_string_pretty(&index).expect("Failed to serialize registry"),
        )
        .expect("Failed to write registry.json");
    }

    /// Write a published file into the registry
    pub fn write_registry_file(&self, path: &str, content: &str) {
        let file_path = self.registry.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write registry file");
    }

    /// A small registry: dialog → button, toast with two files, card standalone
    #[allow(dead_code)]
    pub fn with_standard_registry(self) -> Self {
        self.write_registry(json!([
            {
                "name": "button", "type": "registry:ui", "category": "actions",
                "description": "A clickable button", "status": "stable",
                "files": ["ui/button.tsx"],
                "dependencies": ["@radix-ui/react-slot"]
            },
            {
                "name": "dialog", "type": "registry:ui", "category": "overlay",
                "description": "A modal dialog", "status": "beta",
                "files": ["ui/dialog.tsx"],
                "dependencies": ["@radix-ui/react-dialog"],
                "registryDependencies": ["button"]
            },
            {
                "name": "toast", "type": "registry:ui", "category": "feedback",
                "description": "Toast notifications", "status": "experimental",
                "files": ["ui/toast.tsx", "hooks/use-toast.ts"],
                "devDependencies": ["@types/react"]
            },
            {
                "name": "card", "type": "registry:ui", "category": "display",
                "description": "A content card",
                "files": ["ui/card.tsx"]
            }
        ]));
        self.write_registry_file("ui/button.tsx", BUTTON);
        self.write_registry_file("ui/dialog.tsx", DIALOG);
        self.write_registry_file("ui/toast.tsx", "export const Toast = () => null;\n");
        self.write_registry_file("hooks/use-toast.ts", "export const useToast = () => ({});\n");
        self.write_registry_file("ui/card.tsx", CARD);
        self
    }

    /// Command running the graft binary inside the project against the local registry
    pub fn graft(&self) -> Command {
        let mut cmd = graft_cmd();
        cmd.current_dir(&self.path);
        cmd.env("GRAFT_REGISTRY_DIR", &self.registry);
        cmd
    }
}

#[allow(dead_code)]
pub const BUTTON: &str = "import { cn } from \"@/lib/utils\"\n\nexport function Button() {\n  return cn(\"btn\");\n}\n";

#[allow(dead_code)]
pub const DIALOG: &str = "import { Button } from \"@/components/ui/button\"\n\nexport function Dialog() {\n  return Button();\n}\n";

#[allow(dead_code)]
pub const CARD: &str = "export function Card() {\n  return null;\n}\n";

/// Command for the graft binary with a clean environment
#[allow(deprecated)]
pub fn graft_cmd() -> Command {
    let mut cmd = Command::cargo_bin("graft").expect("graft binary not built");
    // Always ignore any developer overrides during tests
    cmd.env_remove("GRAFT_REGISTRY_DIR");
    cmd.env_remove("GRAFT_LOG");
    cmd
}
