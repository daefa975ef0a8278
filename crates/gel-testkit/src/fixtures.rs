//! Template fixtures
//!
//! One fixture per end-to-end scenario: the template source, the Go call that
//! renders it, and the exact bytes the call must write.

use std::path::{Path, PathBuf};

/// A template together with how to run it and what it renders
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// File name, also used as the document name
    pub name: &'static str,
    /// Template source
    pub source: &'static str,
    /// Go expression rendering into `&b` (a `bytes.Buffer`)
    pub call: &'static str,
    /// Rendered output
    pub expected: &'static str,
}

pub const HELLO_WORLD: Fixture = Fixture {
    name: "hello_world.gel",
    source: "package: main\nfunc: HelloWorld\n---\nHello, World!\n",
    call: "HelloWorld(&b)",
    expected: "Hello, World!\n",
};

pub const HEY_HEY_HEY: Fixture = Fixture {
    name: "hey_hey_hey.gel",
    source: "package: main\nfunc: HeyHeyHey\n---\n<% for i := 0; i < 3; i++ { %>Hey! <% } %>\n",
    call: "HeyHeyHey(&b)",
    expected: "Hey! Hey! Hey! \n",
};

pub const STRING_INTERPOLATION: Fixture = Fixture {
    name: "string_interpolation.gel",
    source: "package: main\nfunc: StringInterpolation\nparameters: name string\n---\nHello, <%= name %>!\n",
    call: "StringInterpolation(&b, \"Jack\")",
    expected: "Hello, Jack!\n",
};

pub const INTEGER_INTERPOLATION: Fixture = Fixture {
    name: "integer_interpolation.gel",
    source: "package: main\nfunc: IntegerInterpolation\nparameters: n int\n---\n<%=i n %>",
    call: "IntegerInterpolation(&b, 5)",
    expected: "5",
};

pub const ESCAPE_HTML: Fixture = Fixture {
    name: "escape_html.gel",
    source: "package: main\nfunc: EscapeHTML\nparameters: name string\nescape: html\n---\n<p>Hello, <%= name %>!</p>\n",
    call: "EscapeHTML(&b, \"<Jack>\")",
    expected: "<p>Hello, &lt;Jack&gt;!</p>\n",
};

pub const COUNTDOWN: Fixture = Fixture {
    name: "countdown.gel",
    source: "package: main\nfunc: Countdown\nparameters: from int\n---\n<% for i := from; i > 0; i-- { %><%=i i %>, <% } %>liftoff\n",
    call: "Countdown(&b, 3)",
    expected: "3, 2, 1, liftoff\n",
};

pub const IMPORTS: Fixture = Fixture {
    name: "imports.gel",
    source: "package: main\nfunc: Imports\nimports: fmt\n---\n<%= fmt.Sprint(1) %>",
    call: "Imports(&b)",
    expected: "1",
};

pub const BACKTICKS: Fixture = Fixture {
    name: "backticks.gel",
    source: "package: main\nfunc: Backticks\n---\nRun `go test`\r\n",
    call: "Backticks(&b)",
    expected: "Run `go test`\r\n",
};

/// Every fixture, in a stable order
pub const FIXTURES: &[Fixture] = &[
    HELLO_WORLD,
    HEY_HEY_HEY,
    STRING_INTERPOLATION,
    INTEGER_INTERPOLATION,
    ESCAPE_HTML,
    COUNTDOWN,
    IMPORTS,
    BACKTICKS,
];

/// Write a fixture's source into `dir`, returning the file path
pub fn write_fixture(dir: &Path, fixture: &Fixture) -> PathBuf {
    let path = dir.join(fixture.name);
    std::fs::write(&path, fixture.source).expect("Failed to write fixture");
    path
}
