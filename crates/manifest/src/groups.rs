//! The literal dependency-group tables of the core manifest.
//!
//! This is configuration data, not logic: every group is a named list of
//! module coordinates bound to a scope, with zero or more transitive
//! exclusions applied uniformly to the group. The coordinates and their
//! ordering are load-bearing (existing build outputs depend on them), so
//! they are kept as a structured table and iterated generically by the
//! builder instead of being spread across per-group registration code.

use serde::Serialize;

/// How a group's scope is chosen at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScopeBinding {
    /// Always this literal scope, regardless of provided mode.
    Fixed(&'static str),
    /// The compile role: `compile`, or `provided` in provided mode.
    CompileDefault,
    /// The runtime role: `runtime`, or `provided` in provided mode.
    RuntimeDefault,
}

/// The version a module spec asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionSpec {
    /// A fixed revision string.
    Pinned(&'static str),
    /// Tracks the framework core version passed to the manifest build.
    Core,
}

/// One module entry in a group table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleSpec {
    /// Module group (organisation).
    pub group: &'static str,
    /// Module name.
    pub name: &'static str,
    /// Requested version.
    pub version: VersionSpec,
}

/// A named dependency group: scope binding, modules, and the transitive
/// exclusions applied to every module of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyGroup {
    /// Logical group name (diagnostics only; the resolver sees scopes).
    pub name: &'static str,
    /// How the group's scope is resolved.
    pub scope: ScopeBinding,
    /// The modules of the group, in registration order.
    pub modules: &'static [ModuleSpec],
    /// Transitive module names excluded from every module's closure.
    pub excluded_modules: &'static [&'static str],
}

const fn pinned(group: &'static str, name: &'static str, version: &'static str) -> ModuleSpec {
    ModuleSpec {
        group,
        name,
        version: VersionSpec::Pinned(version),
    }
}

const fn tracking_core(group: &'static str, name: &'static str) -> ModuleSpec {
    ModuleSpec {
        group,
        name,
        version: VersionSpec::Core,
    }
}

/// Every dependency group of the core manifest, in registration order.
pub const DEPENDENCY_GROUPS: &[DependencyGroup] = &[
    // Dependencies needed by the build system itself
    DependencyGroup {
        name: "build",
        scope: ScopeBinding::Fixed("build"),
        modules: &[
            pinned("org.tmatesoft.svnkit", "svnkit", "1.3.4"),
            pinned("org.apache.ant", "ant", "1.8.1"),
            pinned("org.apache.ant", "ant-launcher", "1.8.1"),
            pinned("org.apache.ant", "ant-junit", "1.8.1"),
            pinned("org.apache.ant", "ant-nodeps", "1.8.1"),
            pinned("org.apache.ant", "ant-trax", "1.7.1"),
            pinned("jline", "jline", "0.9.94"),
            pinned("org.fusesource.jansi", "jansi", "1.2.1"),
            pinned("xalan", "serializer", "2.7.1"),
            tracking_core("org.grails", "grails-docs"),
            tracking_core("org.grails", "grails-bootstrap"),
            tracking_core("org.grails", "grails-scripts"),
            tracking_core("org.grails", "grails-core"),
            tracking_core("org.grails", "grails-resources"),
            tracking_core("org.grails", "grails-web"),
            pinned("org.slf4j", "slf4j-api", "1.6.1"),
            pinned("org.slf4j", "slf4j-log4j12", "1.6.1"),
            pinned("org.springframework", "spring-test", "3.0.5.RELEASE"),
            pinned(
                "com.googlecode.concurrentlinkedhashmap",
                "concurrentlinkedhashmap-lru",
                "1.1_jdk5",
            ),
        ],
        excluded_modules: &[],
    },
    // Dependencies needed when creating docs
    DependencyGroup {
        name: "docs",
        scope: ScopeBinding::Fixed("docs"),
        modules: &[
            pinned("org.xhtmlrenderer", "core-renderer", "R8"),
            pinned("com.lowagie", "itext", "2.0.8"),
            pinned("org.grails", "grails-radeox", "1.0-b4"),
        ],
        excluded_modules: &[],
    },
    // Dependencies needed during development, but not for deployment
    DependencyGroup {
        name: "provided",
        scope: ScopeBinding::Fixed("provided"),
        modules: &[
            pinned("javax.servlet", "servlet-api", "2.5"),
            pinned("javax.servlet.jsp", "jsp-api", "2.1"),
        ],
        excluded_modules: &[],
    },
    // The language runtime; jline excluded so the interactive console
    // dependency is not bundled into production artifacts
    DependencyGroup {
        name: "language-runtime",
        scope: ScopeBinding::CompileDefault,
        modules: &[pinned("org.codehaus.groovy", "groovy-all", "1.8.0-rc-1")],
        excluded_modules: &["jline"],
    },
    // Commons utilities; logging and XML APIs excluded to avoid pulling in
    // conflicting bindings transitively
    DependencyGroup {
        name: "common-utilities",
        scope: ScopeBinding::CompileDefault,
        modules: &[
            pinned("commons-beanutils", "commons-beanutils", "1.8.0"),
            pinned("commons-el", "commons-el", "1.0"),
            pinned("commons-validator", "commons-validator", "1.3.1"),
        ],
        excluded_modules: &["commons-logging", "xml-apis"],
    },
    // Dependencies needed at compile time
    DependencyGroup {
        name: "core-framework",
        scope: ScopeBinding::CompileDefault,
        modules: &[
            pinned("org.coconut.forkjoin", "jsr166y", "070108"),
            pinned("org.codehaus.gpars", "gpars", "0.9"),
            pinned("aopalliance", "aopalliance", "1.0"),
            pinned(
                "com.googlecode.concurrentlinkedhashmap",
                "concurrentlinkedhashmap-lru",
                "1.1_jdk5",
            ),
            pinned("commons-codec", "commons-codec", "1.4"),
            pinned("commons-collections", "commons-collections", "3.2.1"),
            pinned("commons-io", "commons-io", "1.4"),
            pinned("commons-lang", "commons-lang", "2.4"),
            pinned("javax.transaction", "jta", "1.1"),
            pinned("javax.persistence", "persistence-api", "1.0"),
            pinned("opensymphony", "sitemesh", "2.4"),
            tracking_core("org.grails", "grails-bootstrap"),
            tracking_core("org.grails", "grails-core"),
            tracking_core("org.grails", "grails-crud"),
            tracking_core("org.grails", "grails-hibernate"),
            tracking_core("org.grails", "grails-resources"),
            tracking_core("org.grails", "grails-spring"),
            tracking_core("org.grails", "grails-web"),
            pinned("org.grails", "grails-datastore-gorm", "1.0.0.BUILD-SNAPSHOT"),
            // Plugins
            tracking_core("org.grails", "grails-plugin-codecs"),
            tracking_core("org.grails", "grails-plugin-controllers"),
            tracking_core("org.grails", "grails-plugin-domain-class"),
            tracking_core("org.grails", "grails-plugin-converters"),
            tracking_core("org.grails", "grails-plugin-datasource"),
            tracking_core("org.grails", "grails-plugin-filters"),
            tracking_core("org.grails", "grails-plugin-gsp"),
            tracking_core("org.grails", "grails-plugin-i18n"),
            tracking_core("org.grails", "grails-plugin-logging"),
            tracking_core("org.grails", "grails-plugin-scaffolding"),
            tracking_core("org.grails", "grails-plugin-services"),
            tracking_core("org.grails", "grails-plugin-servlets"),
            tracking_core("org.grails", "grails-plugin-url-mappings"),
            tracking_core("org.grails", "grails-plugin-validation"),
            pinned("org.springframework", "spring-core", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-aop", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-aspects", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-asm", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-beans", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-context", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-expression", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-instrument", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-jdbc", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-jms", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-orm", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-oxm", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-tx", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-web", "3.0.5.RELEASE"),
            pinned("org.springframework", "spring-webmvc", "3.0.5.RELEASE"),
            pinned(
                "org.springframework",
                "spring-datastore-core",
                "1.0.0.BUILD-SNAPSHOT",
            ),
            pinned("org.slf4j", "slf4j-api", "1.6.1"),
        ],
        excluded_modules: &[],
    },
    // Dependencies needed for running tests
    DependencyGroup {
        name: "test",
        scope: ScopeBinding::Fixed("test"),
        modules: &[
            pinned("junit", "junit", "4.8.1"),
            tracking_core("org.grails", "grails-plugin-testing"),
            tracking_core("org.grails", "grails-test"),
            pinned("org.springframework", "spring-test", "3.0.5.RELEASE"),
        ],
        excluded_modules: &[],
    },
    // Dependencies needed at runtime only
    DependencyGroup {
        name: "runtime-only",
        scope: ScopeBinding::RuntimeDefault,
        modules: &[
            pinned("org.aspectj", "aspectjweaver", "1.6.10"),
            pinned("org.aspectj", "aspectjrt", "1.6.10"),
            pinned("cglib", "cglib-nodep", "2.1_3"),
            pinned("commons-fileupload", "commons-fileupload", "1.2.1"),
            pinned("oro", "oro", "2.0.8"),
            pinned("javax.servlet", "jstl", "1.1.2"),
            // data source
            pinned("commons-dbcp", "commons-dbcp", "1.3"),
            pinned("commons-pool", "commons-pool", "1.5.5"),
            pinned("hsqldb", "hsqldb", "1.8.0.10"),
            pinned("com.h2database", "h2", "1.2.147"),
            // JSP support
            pinned("taglibs", "standard", "1.1.2"),
            pinned("xpp3", "xpp3_min", "1.1.4c"),
        ],
        excluded_modules: &[],
    },
    // Cache provider; messaging, logging facade, and servlet API come in
    // transitively and conflict with the provided/runtime stacks
    DependencyGroup {
        name: "cache-provider",
        scope: ScopeBinding::RuntimeDefault,
        modules: &[pinned("net.sf.ehcache", "ehcache-core", "2.3.1")],
        excluded_modules: &["jms", "commons-logging", "servlet-api"],
    },
    // Logging backend
    DependencyGroup {
        name: "logging-backend",
        scope: ScopeBinding::RuntimeDefault,
        modules: &[
            pinned("log4j", "log4j", "1.2.16"),
            pinned("org.slf4j", "jcl-over-slf4j", "1.6.1"),
            pinned("org.slf4j", "jul-to-slf4j", "1.6.1"),
            pinned("org.slf4j", "slf4j-log4j12", "1.6.1"),
        ],
        excluded_modules: &["mail", "jms", "jmxtools", "jmxri"],
    },
];
