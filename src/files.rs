//! Path and content classification helpers.
//!
//! These answer questions about a file that are independent of its
//! language: is it vendored, generated, documentation, hidden, a test, an
//! image or binary data. The repository summary uses them to decide what to
//! skip.

use lazy_static::lazy_static;
use regex::bytes::Regex;
use regex::RegexSet;
use std::path::Path;

/// Bytes inspected by [`is_binary`].
pub const BINARY_SNIFF_LEN: usize = 8000;

lazy_static! {
    static ref VENDOR: RegexSet = RegexSet::new([
        r"(^|/)cache/",
        r"^[Dd]ependencies/",
        r"(^|/)dist/",
        r"^deps/",
        r"(^|/)configure$",
        r"(^|/)config\.guess$",
        r"(^|/)config\.sub$",
        r"(^|/)aclocal\.m4",
        r"(^|/)libtool\.m4",
        r"(^|/)ltoptions\.m4",
        r"(^|/)ltsugar\.m4",
        r"(^|/)ltversion\.m4",
        r"(^|/)lt~obsolete\.m4",
        r"cpplint\.py",
        r"node_modules/",
        r"(^|/)bower_components/",
        r"^rebar$",
        r"(^|/)erlang\.mk",
        r"(^|/)Godeps/_workspace/",
        r"(^|/)testdata/",
        r"(\.|-)min\.(js|css)$",
        r"([^\s]*)import\.(css|less|scss|styl)$",
        r"(^|/)bootstrap([^.]*)\.(js|css|less|scss|styl)$",
        r"(^|/)custom\.bootstrap([^\s]*)(js|css|less|scss|styl)$",
        r"(^|/)font-?awesome\.(css|less|scss|styl)$",
        r"(^|/)foundation\.(css|less|scss|styl)$",
        r"(^|/)normalize\.(css|less|scss|styl)$",
        r"(^|/)skeleton\.(css|less|scss|styl)$",
        r"(^|/)[Bb]ourbon/.*\.(css|less|scss|styl)$",
        r"(^|/)animate\.(css|less|scss|styl)$",
        r"(^|/)materialize\.(css|less|scss|styl|js)$",
        r"(^|/)select2/.*\.(css|scss|js)$",
        r"(3rd|[Tt]hird)[-_]?[Pp]arty/",
        r"(^|/)vendors?/",
        r"(^|/)extern(al)?/",
        r"(^|/)[Vv]+endor/",
        r"^debian/",
        r"run\.n$",
        r"bootstrap-datepicker/",
        r"(^|/)jquery([^.]*)\.js$",
        r"(^|/)jquery\-\d\.\d+(\.\d+)?\.js$",
        r"(^|/)jquery\-ui(\-\d\.\d+(\.\d+)?)?(\.\w+)?\.(js|css)$",
        r"(^|/)jquery\.(ui|effects)\.([^.]*)\.(js|css)$",
        r"jquery.fn.gantt.js",
        r"jquery.fancybox.(js|css)",
        r"fuelux.js",
        r"(^|/)jquery\.fileupload(-\w+)?\.js$",
        r"jquery.dataTables.js",
        r"bootbox.js",
        r"pdf.worker.js",
        r"(^|/)slick\.\w+.js$",
        r"(^|/)Leaflet\.Coordinates-\d+\.\d+\.\d+\.src\.js$",
        r"leaflet.draw-src.js",
        r"leaflet.draw.css",
        r"Control.FullScreen.css",
        r"Control.FullScreen.js",
        r"leaflet.spin.js",
        r"wicket-leaflet.js",
        r".sublime-project",
        r".sublime-workspace",
        r".vscode",
        r"(^|/)prototype(.*)\.js$",
        r"(^|/)effects\.js$",
        r"(^|/)controls\.js$",
        r"(^|/)dragdrop\.js$",
        r"(.*?)\.d\.ts$",
        r"(^|/)mootools([^.]*)\d+\.\d+.\d+([^.]*)\.js$",
        r"(^|/)dojo\.js$",
        r"(^|/)MochiKit\.js$",
        r"(^|/)yahoo-([^.]*)\.js$",
        r"(^|/)yui([^.]*)\.js$",
        r"(^|/)ckeditor\.js$",
        r"(^|/)tiny_mce([^.]*)\.js$",
        r"(^|/)tiny_mce/(langs|plugins|themes|utils)",
        r"(^|/)ace-builds/",
        r"(^|/)fontello(.*?)\.css$",
        r"(^|/)MathJax/",
        r"(^|/)Chart\.js$",
        r"(^|/)[Cc]ode[Mm]irror/(\d+\.\d+/)?(lib|mode|theme|addon|keymap|demo)",
        r"(^|/)shBrush([^.]*)\.js$",
        r"(^|/)shCore\.js$",
        r"(^|/)shLegacy\.js$",
        r"(^|/)angular([^.]*)\.js$",
        r"(^|/)d3(\.v\d+)?([^.]*)\.js$",
        r"(^|/)react(-[^.]*)?\.js$",
        r"(^|/)flow-typed/.*\.js$",
        r"(^|/)modernizr\-\d\.\d+(\.\d+)?\.js$",
        r"(^|/)modernizr\.custom\.\d+\.js$",
        r"(^|/)knockout-(\d+\.){3}(debug\.)?js$",
        r"(^|/)docs?/_?(build|themes?|templates?|static)/",
        r"(^|/)admin_media/",
        r"(^|/)env/",
        r"^fabfile\.py$",
        r"^waf$",
        r"^.osx$",
        r"\.xctemplate/",
        r"\.imageset/",
        r"(^|/)Carthage/",
        r"(^|/)Sparkle/",
        r"Crashlytics.framework/",
        r"Fabric.framework/",
        r"BuddyBuildSDK.framework/",
        r"Realm.framework",
        r"RealmSwift.framework",
        r"gitattributes$",
        r"gitignore$",
        r"gitmodules$",
        r"(^|/)gradlew$",
        r"(^|/)gradlew\.bat$",
        r"(^|/)gradle/wrapper/",
        r"(^|/)mvnw$",
        r"(^|/)mvnw\.cmd$",
        r"(^|/)\.mvn/wrapper/",
        r"-vsdoc\.js$",
        r"\.intellisense\.js$",
        r"(^|/)jquery([^.]*)\.validate(\.unobtrusive)?\.js$",
        r"(^|/)jquery([^.]*)\.unobtrusive\-ajax\.js$",
        r"(^|/)[Mm]icrosoft([Mm]vc)?([Aa]jax|[Vv]alidation)(\.debug)?\.js$",
        r"^[Pp]ackages/.+\.\d+/",
        r"(^|/)extjs/.*?\.js$",
        r"(^|/)extjs/.*?\.xml$",
        r"(^|/)extjs/.*?\.txt$",
        r"(^|/)extjs/.*?\.html$",
        r"(^|/)extjs/.*?\.properties$",
        r"(^|/)extjs/.sencha/",
        r"(^|/)extjs/docs/",
        r"(^|/)extjs/builds/",
        r"(^|/)extjs/cmd/",
        r"(^|/)extjs/examples/",
        r"(^|/)extjs/locale/",
        r"(^|/)extjs/packages/",
        r"(^|/)extjs/plugins/",
        r"(^|/)extjs/resources/",
        r"(^|/)extjs/src/",
        r"(^|/)extjs/welcome/",
        r"(^|/)html5shiv\.js$",
        r"^[Tt]ests?/fixtures/",
        r"^[Ss]pecs?/fixtures/",
        r"(^|/)cordova([^.]*)\.js$",
        r"(^|/)cordova\-\d\.\d(\.\d)?\.js$",
        r"foundation(\..*)?\.js$",
        r"^Vagrantfile$",
        r"\.[Dd][Ss]_[Ss]tore$",
        r"^vignettes/",
        r"^inst/extdata/",
        r"octicons.css",
        r"sprockets-octicons.scss",
        r"(^|/)activator$",
        r"(^|/)activator\.bat$",
        r"proguard.pro",
        r"proguard-rules.pro",
        r"^puphpet/",
        r"(^|/)\.google_apis/",
        r"^Jakefile$",
    ])
    .unwrap();
    static ref DOCUMENTATION: RegexSet = RegexSet::new([
        r"^[Dd]ocs?/",
        r"(^|/)[Dd]ocumentation/",
        r"(^|/)[Jj]avadoc/",
        r"^[Mm]an/",
        r"^[Ee]xamples/",
        r"^[Dd]emos?/",
        r"(^|/)CHANGE(S|LOG)?(\.|$)",
        r"(^|/)CONTRIBUTING(\.|$)",
        r"(^|/)COPYING(\.|$)",
        r"(^|/)INSTALL(\.|$)",
        r"(^|/)LICEN[CS]E(\.|$)",
        r"(^|/)[Ll]icen[cs]e(\.|$)",
        r"(^|/)README(\.|$)",
        r"(^|/)[Rr]eadme(\.|$)",
        r"^[Ss]amples?/",
    ])
    .unwrap();
    static ref TEST: RegexSet = RegexSet::new([
        r"(^|/)tests/.*Test\.php$",
        r"(^|/)test/.*Test(s?)\.java$",
        r"(^|/)test(/|/.*/)Test.*\.java$",
        r"(^|/)test/.*(Test(s?)|Spec(s?))\.scala$",
        r"(^|/)test_.*\.py$",
        r"(^|/).*_test\.go$",
        r"(^|/).*_(test|spec)\.rb$",
        r"(^|/).*Test(s?)\.cs$",
        r"(^|/).*\.(test|spec)\.(ts|tsx|js)$",
        r"(^|/)tests?/.*\.rs$",
    ])
    .unwrap();
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extensions (lowercase, with the dot) that are always tool output.
const GENERATED_EXTENSIONS: &[&str] = &[".nib", ".xcworkspacedata", ".xcuserstate"];

lazy_static! {
    static ref GENERATED_NAME: RegexSet = RegexSet::new([
        r"(^|/)Pods/",
        r"(^|/)Carthage/Build/",
        r"(^|/)vendor/(?:[0-9A-Za-z][-0-9A-Za-z]*\.)+(?:com|edu|gov|in|me|net|org|fm|io)/",
        r"(?i)\.designer\.(?:cs|vb)$",
        r"(^|/)composer\.lock$",
        r"(^|/)node_modules/",
        r"(^|/)(?:npm-shrinkwrap|package-lock)\.json$",
        r"(^|/)pnpm-lock\.yaml$",
        r"(^|/)\.pnp\.[^/]*$",
        r"(^|/)Godeps/",
        r"\.zep\.(?:c|h|php)$",
        r"\.feature\.cs$",
        r"(^|/)__generated__/",
        r"(^|/)Pipfile\.lock$",
        r"(^|/)Cargo\.toml\.orig$",
        r"(^|/)(?:poetry|pdm|uv)\.lock$",
        r"(^|/)htmlcov/",
        r"(^|/)flake\.lock$",
        r"(^|/)MODULE\.bazel\.lock$",
        r"(^|/)deno\.lock$",
        r"(?i)_tlb\.pas$",
        r"(^|/)\.sqlx/query-[0-9a-f]{64}\.json$",
        r"(^|/)\.idea/",
        r"(^|/)\.terraform\.lock\.hcl$",
    ])
    .unwrap();
    static ref SOURCE_MAP_COMMENT: Regex =
        Regex::new(r"^/[*/][#@] source(?:Mapping)?URL|sourceURL=").unwrap();
    static ref SOURCE_MAP_NAME: Regex = Regex::new(r"\.(?:css|js)\.map$").unwrap();
    static ref SOURCE_MAP_HEADER: Regex =
        Regex::new(r#"^\{"version":\d+,|^/\*\* Begin line maps\. \*\*/\{"#).unwrap();
    static ref POSTSCRIPT_FONT: Regex =
        Regex::new(r"(?m)^\s*(?:currentfile eexec\s+|/sfnts\s+\[\s*<)[0-9A-Fa-f]{8,}").unwrap();
    static ref POSTSCRIPT_CREATOR: Regex = Regex::new(
        r"[0-9]|draw|mpage|ImageMagick|inkscape|MATLAB|PCBNEW|pnmtops|\(Unknown\)|Serif Affinity|Filterimage -tops"
    )
    .unwrap();
    static ref GAME_MAKER_HEADER: Regex = Regex::new(r"^\d\.\d\.\d.+\|\{").unwrap();
    static ref GIMP_DUMP: Regex = Regex::new(
        r"/\* GIMP [a-zA-Z0-9\- ]+ C-Source image dump \(.+?\.c\) \*/|/\*  GIMP header image file format \([a-zA-Z0-9\- ]+\): .+?\.h  \*/"
    )
    .unwrap();
    static ref HTML_META: Regex = Regex::new(r"(?i)<meta(\s+[^>]+)>").unwrap();
    static ref HTML_ATTRIBUTE: Regex = Regex::new(
        r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    )
    .unwrap();
    static ref HTML_GENERATOR: Regex =
        Regex::new(r"(?i)^(?:org\s+mode|j?latex2html|groff|makeinfo|texi2html|ronn|mandoc)\b").unwrap();
}

/// A comment some tool writes near the top of every file it emits.
struct GeneratedMarker {
    extensions: &'static [&'static str],
    /// Leading lines searched.
    within: usize,
    needle: &'static str,
}

const GENERATED_MARKERS: &[GeneratedMarker] = &[
    GeneratedMarker {
        extensions: &[".go"],
        within: 40,
        needle: "// Code generated ",
    },
    GeneratedMarker {
        extensions: &[".py", ".java", ".h", ".cc", ".cpp", ".m", ".rb", ".php"],
        within: 3,
        needle: "Generated by the protocol buffer compiler.  DO NOT EDIT!",
    },
    GeneratedMarker {
        extensions: &[".js"],
        within: 6,
        needle: "GENERATED CODE -- DO NOT EDIT!",
    },
    GeneratedMarker {
        extensions: &[".rb", ".py", ".go", ".js", ".m", ".java", ".h", ".cc", ".cpp", ".php"],
        within: 6,
        needle: "Autogenerated by Thrift Compiler",
    },
    GeneratedMarker {
        extensions: &[".js"],
        within: 1,
        needle: "// Generated by CoffeeScript",
    },
    GeneratedMarker {
        extensions: &[".js"],
        within: 1,
        needle: "/* parser generated by jison ",
    },
    GeneratedMarker {
        extensions: &[".js"],
        within: 1,
        needle: "/* generated by jison-lex ",
    },
    GeneratedMarker {
        extensions: &[".rb"],
        within: 3,
        needle: "# This file is automatically generated by Racc",
    },
    GeneratedMarker {
        extensions: &[".java"],
        within: 1,
        needle: "/* The following code was generated by JFlex ",
    },
    GeneratedMarker {
        extensions: &[".java"],
        within: 1,
        needle: "// This is a generated file. Not intended for manual editing.",
    },
    GeneratedMarker {
        extensions: &[".rd"],
        within: 1,
        needle: "% Generated by roxygen2: do not edit by hand",
    },
    GeneratedMarker {
        extensions: &[".cpp", ".hpp", ".h", ".cc"],
        within: 1,
        needle: "// Generated by the gRPC",
    },
    GeneratedMarker {
        extensions: &[".h"],
        within: 1,
        needle: "/* DO NOT EDIT THIS FILE - it is machine generated */",
    },
    GeneratedMarker {
        extensions: &[".dart"],
        within: 3,
        needle: "GENERATED CODE - DO NOT MODIFY BY HAND",
    },
    GeneratedMarker {
        extensions: &[".js", ".py", ".lua", ".cpp", ".h", ".java", ".cs", ".php"],
        within: 3,
        needle: "Generated by Haxe",
    },
    GeneratedMarker {
        extensions: &[".h"],
        within: 12,
        needle: "Automatically created by Devel::PPPort",
    },
];

/// Checks on the lowercased path, lowercased extension and content lines.
type ContentMatcher = fn(&str, &str, &[&[u8]]) -> bool;

const GENERATED_CONTENT: &[ContentMatcher] = &[
    has_generated_marker,
    is_minified,
    has_source_map,
    is_source_map,
    is_generated_postscript,
    is_game_maker_project,
    is_gimp_dump,
    is_generated_html,
    is_net_doc_file,
];

/// True for vendored or generated third-party paths.
pub fn is_vendor(path: &str) -> bool {
    VENDOR.is_match(path)
}

/// True for files written by tools rather than people: lock files,
/// IDE and package manager state, minified bundles, source maps and files
/// carrying a generator's banner.
///
/// Path rules are checked first; `content` is only inspected by the
/// content rules and may be empty.
pub fn is_generated(path: &str, content: &[u8]) -> bool {
    let ext = dotted_extension(path);
    if GENERATED_EXTENSIONS.contains(&ext.as_str()) || GENERATED_NAME.is_match(path) {
        return true;
    }

    let path = path.to_ascii_lowercase();
    let lines = content_lines(content);
    GENERATED_CONTENT
        .iter()
        .any(|rule| rule(&path, &ext, &lines))
}

/// Lowercase extension of the last path component, dot included.
fn dotted_extension(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.')
        .map(|dot| name[dot..].to_ascii_lowercase())
        .unwrap_or_default()
}

fn content_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

fn has_generated_marker(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    GENERATED_MARKERS
        .iter()
        .filter(|marker| marker.extensions.contains(&ext))
        .any(|marker| {
            lines
                .iter()
                .take(marker.within)
                .any(|line| contains(line, marker.needle.as_bytes()))
        })
}

fn is_minified(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    if !matches!(ext, ".js" | ".css") || lines.is_empty() {
        return false;
    }
    let total: usize = lines.iter().map(|line| line.len()).sum();
    total / lines.len() > 110
}

fn has_source_map(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    matches!(ext, ".js" | ".css")
        && lines
            .iter()
            .rev()
            .take(2)
            .any(|line| SOURCE_MAP_COMMENT.is_match(line))
}

fn is_source_map(path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    ext == ".map"
        && (SOURCE_MAP_NAME.is_match(path.as_bytes())
            || lines.first().is_some_and(|line| SOURCE_MAP_HEADER.is_match(line)))
}

fn is_generated_postscript(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    if !matches!(ext, ".ps" | ".eps" | ".pfa") {
        return false;
    }
    // Type 1 and Type 42 fonts converted to PostScript.
    if POSTSCRIPT_FONT.is_match(&lines.join(&b'\n')) {
        return true;
    }
    lines
        .iter()
        .take(10)
        .find_map(|line| line.strip_prefix(b"%%Creator: "))
        .is_some_and(|creator| POSTSCRIPT_CREATOR.is_match(creator))
}

fn is_game_maker_project(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    if !matches!(ext, ".yy" | ".yyp") || lines.len() <= 3 {
        return false;
    }
    let head = lines[..3].concat();
    let opens_document = head
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .copied()
        .is_some_and(|b| matches!(b, b'{' | b'['));
    opens_document || GAME_MAKER_HEADER.is_match(lines[0])
}

fn is_gimp_dump(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    matches!(ext, ".c" | ".h") && lines.first().is_some_and(|line| GIMP_DUMP.is_match(line))
}

fn is_generated_html(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    if !matches!(ext, ".html" | ".htm" | ".xhtml") || lines.len() <= 1 {
        return false;
    }
    if lines.iter().take(2).any(|line| {
        contains(line, b"<!-- This is an automatically generated file.")
            || contains(line, b"<!-- Generated by pkgdown: do not edit by hand -->")
    }) {
        return true;
    }

    let head = lines.iter().take(31).copied().collect::<Vec<_>>().join(&b' ');
    HTML_META.captures_iter(&head).any(|meta| {
        let Some(attributes) = meta.get(1) else {
            return false;
        };
        let mut is_generator = false;
        let mut generator_matches = false;
        for attr in HTML_ATTRIBUTE.captures_iter(attributes.as_bytes()) {
            let (Some(name), Some(value)) =
                (attr.get(1), attr.get(2).or(attr.get(3)).or(attr.get(4)))
            else {
                continue;
            };
            match name.as_bytes().to_ascii_lowercase().as_slice() {
                b"name" => is_generator = value.as_bytes().eq_ignore_ascii_case(b"generator"),
                b"content" | b"value" => {
                    generator_matches |= HTML_GENERATOR.is_match(value.as_bytes());
                }
                _ => {}
            }
        }
        is_generator && generator_matches
    })
}

fn is_net_doc_file(_path: &str, ext: &str, lines: &[&[u8]]) -> bool {
    ext == ".xml"
        && lines.len() > 3
        && contains(lines[2], b"<doc>")
        && contains(lines[lines.len() - 2], b"</doc>")
}

/// True for documentation paths such as `docs/` or `README.md`.
pub fn is_documentation(path: &str) -> bool {
    DOCUMENTATION.is_match(path)
}

/// True when the final component of `path` is hidden.
pub fn is_dot_file(path: &str) -> bool {
    let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);
    name.starts_with('.') && name != "." && name != ".."
}

/// True for paths following common test file naming conventions.
pub fn is_test(path: &str) -> bool {
    TEST.is_match(path)
}

/// True for common raster image extensions.
pub fn is_image(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// True when `content` has a NUL byte within its first [`BINARY_SNIFF_LEN`]
/// bytes.
pub fn is_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    head.contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_paths() {
        assert!(is_vendor("node_modules/left-pad/index.js"));
        assert!(is_vendor("src/vendor/lib.go"));
        assert!(is_vendor("third_party/zlib/zlib.h"));
        assert!(is_vendor("static/app.min.js"));
        assert!(is_vendor("web/jquery-3.1.1.js"));
        assert!(is_vendor("types/index.d.ts"));
        assert!(is_vendor("gradle/wrapper/gradle-wrapper.properties"));
        assert!(is_vendor("Vagrantfile"));
        assert!(!is_vendor("src/main.rs"));
        assert!(!is_vendor("lib/vendoring.rb"));
    }

    #[test]
    fn test_documentation_paths() {
        assert!(is_documentation("docs/guide.md"));
        assert!(is_documentation("README.md"));
        assert!(is_documentation("pkg/LICENSE"));
        assert!(is_documentation("CHANGELOG"));
        assert!(is_documentation("src/Documentation/intro.txt"));
        assert!(!is_documentation("src/readme_parser.rs"));
        assert!(!is_documentation("src/docs.rs"));
    }

    #[test]
    fn test_dot_files() {
        assert!(is_dot_file(".gitignore"));
        assert!(is_dot_file("a/b/.env"));
        assert!(is_dot_file("a/.git/"));
        assert!(!is_dot_file("a/b.rs"));
        assert!(!is_dot_file("."));
        assert!(!is_dot_file(".."));
    }

    #[test]
    fn test_test_paths() {
        assert!(is_test("pkg/server_test.go"));
        assert!(is_test("test_parser.py"));
        assert!(is_test("src/app.spec.ts"));
        assert!(!is_test("src/server.go"));
    }

    #[test]
    fn test_images_and_binary() {
        assert!(is_image("logo.PNG"));
        assert!(is_image("a/b/photo.jpeg"));
        assert!(!is_image("image.svg"));

        assert!(is_binary(b"\x89PNG\r\n\x1a\n\0\0"));
        assert!(!is_binary(b"plain text"));
        let mut late = vec![b'a'; BINARY_SNIFF_LEN];
        late.push(0);
        assert!(!is_binary(&late));
    }

    #[test]
    fn test_generated_paths() {
        for path in [
            "Binary/MainMenu.nib",
            "Dummy/foo.xcworkspacedata",
            "Pods/Pods.xcodeproj",
            "Dummy/Pods/ObjCDependency/foo.m",
            "src/Carthage/Build/iOS/Dependency.framework",
            "go/vendor/golang.org/src/foo.c",
            "go/vendor/gopkg.in/some/nested/path/foo.go",
            "Dummy/foo.Designer.cs",
            "JSON/composer.lock",
            "Dummy/node_modules/foo.js",
            "Dummy/package-lock.json",
            "Dummy/pnpm-lock.yaml",
            ".pnp.loader.mjs",
            "Godeps/_workspace/src/github.com/kr/s3/sign.go",
            "PHP/exception.zep.php",
            "Features/BindingCulture.feature.cs",
            "Javascript/__generated__/App_user.graphql.js",
            "Dummy/Pipfile.lock",
            "TOML/filenames/Cargo.toml.orig",
            "TOML/filenames/uv.lock",
            "Dummy/htmlcov/status.json",
            "JSON/filenames/flake.lock",
            "JSON/filenames/MODULE.bazel.lock",
            "Pascal/lazcomlib_1_0_tlb.pas",
            "Rust/.sqlx/query-2b8b1aae3740a05cb7179be9c7d5af30e8362c3cba0b07bc18fa32ff1a2232cc.json",
            "Dummy/.idea/vcs.xml",
            "Dummy/.terraform.lock.hcl",
        ] {
            assert!(is_generated(path, b""), "{}", path);
        }

        for path in [
            "Jest Snapshot/css.test.tsx.snap",
            "YAML/filenames/yarn.lock",
            "src/main.rs",
            "Rust/.sqlx/query-short.json",
        ] {
            assert!(!is_generated(path, b""), "{}", path);
        }
    }

    #[test]
    fn test_minified_and_source_maps() {
        let minified = format!("{}\n", "var a=1;".repeat(20));
        assert!(is_generated("web/bundle.js", minified.as_bytes()));
        assert!(!is_generated("web/app.js", b"var a = 1;\nvar b = 2;\n"));

        assert!(is_generated(
            "JavaScript/namespace.js",
            b"var a = 1;\n//# sourceMappingURL=namespace.js.map\n"
        ));
        assert!(is_generated(
            "Generated/linked.css",
            b"a { color: red }\n/*# sourceMappingURL=linked.css.map */\n"
        ));

        assert!(is_generated("Generated/linked.css.map", b""));
        assert!(is_generated("Data/sourcemap.v3.map", b"{\"version\":3,\"file\":\"a.js\"}"));
        assert!(is_generated(
            "Data/sourcemap.v1.map",
            b"/** Begin line maps. **/{ \"file\":\"a.js\" }\n"
        ));
        assert!(!is_generated("Data/routes.map", b"north -> south\n"));
    }

    #[test]
    fn test_generator_banners() {
        let cases: &[(&str, &[u8])] = &[
            ("pkg/api.pb.go", b"// Code generated by protoc-gen-go. DO NOT EDIT.\npackage api\n"),
            (
                "Java/JFlexLexer.java",
                b"/* The following code was generated by JFlex 1.4.3 */\npackage x;\n",
            ),
            (
                "Java/GrammarKit.java",
                b"// This is a generated file. Not intended for manual editing.\npackage x;\n",
            ),
            ("R/import.Rd", b"% Generated by roxygen2: do not edit by hand\n\\name{x}\n"),
            ("Generated/Haxe/main.py", b"# Generated by Haxe 4.0.5\nimport sys\n"),
            ("C/image.c", b"/* GIMP RGB C-Source image dump (image.c) */\n"),
            ("C/image.h", b"/*  GIMP header image file format (RGB): C/image.h  */\n"),
        ];
        for (path, content) in cases {
            assert!(is_generated(path, content), "{}", path);
        }

        let mut ppport = "/* ppport.h */\n".repeat(10);
        ppport.push_str("    Automatically created by Devel::PPPort running under perl 5.010\n");
        assert!(is_generated("Generated/ppport.h", ppport.as_bytes()));

        // Banners only count for the languages that tool emits.
        assert!(!is_generated("notes/api.txt", b"// Code generated by protoc-gen-go.\n"));
        assert!(!is_generated("pkg/api.go", b"package api\n"));
    }

    #[test]
    fn test_generated_postscript_and_game_maker() {
        assert!(is_generated(
            "PostScript/lambda.pfa",
            b"%!PS-AdobeFont-1.0: Lambda 001.000\ncurrentfile eexec\n743F8413F3636CA85E9FF3\n"
        ));
        assert!(is_generated(
            "art/plot.eps",
            b"%!PS-Adobe-3.0 EPSF-3.0\n%%Creator: inkscape 0.92\n"
        ));
        assert!(!is_generated("art/hand.ps", b"%!PS\n%%Creator: me\n"));

        let project = b"{\n    \"id\": \"a\",\n    \"modelName\": \"GMProject\",\n    \"mvc\": \"1.0\"\n}\n";
        assert!(is_generated("JSON/GMS2_Project.yyp", project));
        assert!(!is_generated("JSON/tiny.yy", b"{}\n"));
    }

    #[test]
    fn test_generated_html() {
        let page = |meta: &str| format!("<html>\n<head>\n{}\n</head>\n</html>\n", meta);

        for meta in [
            r#"<meta name="generator" content="groff -Thtml, see www.gnu.org">"#,
            r#"<meta content="Org mode" name="generator" />"#,
            r#"<meta name='generator' content='makeinfo 4.8'>"#,
            r#"<meta name=generator content=ronn/v0.7.3>"#,
            r#"<META NAME="GENERATOR" CONTENT="LaTeX2HTML 2008">"#,
            r#"<meta   name="generator"    content="mandoc">"#,
        ] {
            assert!(is_generated("HTML/page.html", page(meta).as_bytes()), "{}", meta);
        }

        for meta in [
            r#"<meta name="generator" content="Hand written">"#,
            r#"<meta name="generator">"#,
            r#"<meta name="author" content="groff">"#,
        ] {
            assert!(!is_generated("HTML/page.html", page(meta).as_bytes()), "{}", meta);
        }

        assert!(is_generated(
            "HTML/pages.html",
            b"<!-- This is an automatically generated file.  Do not edit.\n<html>\n"
        ));
        assert!(!is_generated("HTML/no-content.html", b""));
    }
}
