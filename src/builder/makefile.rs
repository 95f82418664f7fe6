//! Makefile rendering.
//!
//! The generated file is an auto-generated variable block followed by a
//! fixed set of rules. Object-level rebuild decisions are left to make.

use crate::core::DependencyClosure;

/// Name of the generated file.
pub const MAKEFILE_NAME: &str = "makefile";

/// Toolchain values substituted into the rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakefileTemplate {
    pub cc: String,
    pub cflags: String,
    pub target: String,
}

impl Default for MakefileTemplate {
    fn default() -> Self {
        MakefileTemplate {
            cc: "gcc".to_string(),
            cflags: "-g -I.".to_string(),
            target: "a.out".to_string(),
        }
    }
}

impl MakefileTemplate {
    /// Render the complete makefile for `closure`.
    pub fn render(&self, closure: &DependencyClosure) -> String {
        let mut out = render_header(closure);
        out.push_str(&self.render_rules());
        out
    }

    fn render_rules(&self) -> String {
        format!(
            r#"
CC={cc}
CFLAGS={cflags}
MAIN_TARGET={target}
OBJ=$(patsubst %.c, %.o, $(FILES))

all: $(MAIN_TARGET)

run: $(MAIN_TARGET)
	@echo
	./$(MAIN_TARGET)

%.o: %.c %.h $(HEADERS)
	$(CC) -c $(CFLAGS) -o $@ $<

%.o: %.c $(HEADERS)
	$(CC) -c $(CFLAGS) -o $@ $<

$(MAIN_TARGET): $(OBJ)
	$(CC) -o $@ $^ $(CFLAGS) $(LIBS)

.PHONY: all run clean
clean:
	rm -f *.o $(MAIN_TARGET) {makefile}
"#,
            cc = self.cc,
            cflags = self.cflags,
            target = self.target,
            makefile = MAKEFILE_NAME,
        )
    }
}

/// Render the auto-generated variable block.
pub fn render_header(closure: &DependencyClosure) -> String {
    let headers: Vec<&str> = closure.headers().iter().map(String::as_str).collect();
    let libs: Vec<&str> = closure.libraries().iter().map(String::as_str).collect();

    format!(
        "\n### auto-generated\nHEADERS = {}\nFILES = {}\nLIBS= {}\n###\n",
        headers.join(" "),
        closure.impl_files().join(" "),
        libs.join(" "),
    )
}
