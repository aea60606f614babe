//! Common source code fixtures for tests.

// Browser-style globals
pub const WINDOW_ASSIGNMENT: &str = "window.blah = 1;";
pub const WINDOW_LOCATION_HREF: &str = "window.location.href;";
pub const WINDOW_AND_LOCATION: &str = "window.location.href;\nlocation;";

pub const ALIASED_WINDOW: &str = "(function (w) {\n  w.location.href = \"x\";\n}) (window);";

// Scoping
pub const SHADOWED_LOCALS: &str = r#"
var config = {};
function init(options) {
    let local = options.value;
    for (var i = 0; i < 10; i++) {
        console.log(local, i, config);
    }
    try {
        risky();
    } catch (err) {
        report(err);
    }
}
"#;

pub const NESTED_FUNCTIONS: &str = r#"
function outer() {
    var shared = 1;
    function inner() {
        return shared + hidden;
    }
    return inner;
}
inner();
"#;

pub const MODULE_IMPORTS: &str = r#"
import React from "react";
import { useState as state, useEffect } from "react";
import * as path from "node:path";

export default function App() {
    state(0);
    useEffect(() => document.title);
    return path.join(React, window.origin);
}
"#;

pub const CLASSES: &str = r#"
class Widget extends Base {
    static count = 0;
    #secret = globalThis.crypto;
    constructor(el) {
        super();
        this.el = el || document.body;
    }
    get size() { return this.el.clientWidth; }
}
new Widget(window.root);
"#;

pub const MODERN_SYNTAX: &str = r#"
const { a, b: [c, ...rest] = fallback } = source ?? {};
async function* stream(url) {
    const response = await fetch(`${base}/items/${url}`);
    for await (const chunk of response.body) {
        yield chunk?.value ?? null;
    }
}
label: for (const key in registry) {
    if (key === undefined) continue label;
    queueMicrotask(() => registry[key] **= 2);
}
const re = /window\.location/g.test(text);
"#;
