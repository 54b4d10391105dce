//! Tests for the JavaScript dialect emitter.

use vellum_ast::{
    BuiltinVar, ClassConstructor, ClassGetter, ClassMethod, ClassStmt, Expr, ExprBuilder,
    ExternalRef, Statement,
};
use vellum_core::{Error, ModuleId};
use vellum_emit::{ImportResolver, JavaScriptEmitter, RelativeImportResolver};

fn emitter() -> JavaScriptEmitter<RelativeImportResolver> {
    JavaScriptEmitter::new(RelativeImportResolver)
}

fn declare_var(name: &str, value: Expr) -> Statement {
    Statement::DeclareVar {
        name: name.to_string(),
        value: Some(value),
    }
}

fn exported(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn test_empty_module_emits_nothing() {
    let source = emitter()
        .emit(&ModuleId::from("app/empty"), &[], &[])
        .unwrap();
    assert_eq!(source, "");
}

#[test]
fn test_module_with_import_and_live_export() {
    // module "app/a" exporting {"x"}:
    //   var x = <y from app/b>;
    //   var z = <x from app/a itself>;
    let module = ModuleId::from("app/a");
    let statements = [
        declare_var("x", ExprBuilder::external("app/b", "y")),
        declare_var("z", ExprBuilder::external("app/a", "x")),
    ];

    let source = emitter()
        .emit(&module, &statements, &exported(&["x"]))
        .unwrap();

    let expected = "var import0 = require('./b');\n\
                    var x = import0.y;\n\
                    Object.defineProperty(exports,'x',{get: function() {\n  \
                    return x;\n\
                    }});\n\
                    var z = x;\n";
    assert_eq!(source, expected);
}

#[test]
fn test_each_referenced_module_gets_exactly_one_alias() {
    let module = ModuleId::from("app/main");
    let statements = [
        declare_var("a", ExprBuilder::external("app/b", "one")),
        declare_var("b", ExprBuilder::external("app/c", "two")),
        declare_var("c", ExprBuilder::external("app/b", "three")),
        declare_var("d", ExprBuilder::external("app/c", "four")),
    ];

    let source = emitter().emit(&module, &statements, &[]).unwrap();

    // One preamble line per distinct module, in first-reference order.
    let expected = "var import0 = require('./b');\n\
                    var import1 = require('./c');\n\
                    var a = import0.one;\n\
                    var b = import1.two;\n\
                    var c = import0.three;\n\
                    var d = import1.four;\n";
    assert_eq!(source, expected);
}

#[test]
fn test_self_and_unowned_references_print_bare() {
    let module = ModuleId::from("app/a");
    let statements = [
        declare_var("p", ExprBuilder::external("app/a", "q")),
        declare_var("r", ExprBuilder::external_local("s")),
    ];

    let source = emitter().emit(&module, &statements, &[]).unwrap();
    assert_eq!(source, "var p = q;\nvar r = s;\n");
    assert!(!source.contains("require"));
}

#[test]
fn test_exported_function_and_class_get_bindings_in_place() {
    let module = ModuleId::from("app/lib");
    let statements = [
        Statement::DeclareFn {
            name: "make".to_string(),
            params: vec![],
            body: vec![Statement::Return(Some(ExprBuilder::int(1)))],
        },
        declare_var("between", ExprBuilder::int(2)),
        Statement::DeclareClass(ClassStmt::new("Thing")),
    ];

    let source = emitter()
        .emit(&module, &statements, &exported(&["make", "Thing"]))
        .unwrap();

    let expected = "function make() {\n  \
                    return 1;\n\
                    }\n\
                    Object.defineProperty(exports,'make',{get: function() {\n  \
                    return make;\n\
                    }});\n\
                    var between = 2;\n\
                    function Thing() {\n\
                    }\n\
                    Object.defineProperty(exports,'Thing',{get: function() {\n  \
                    return Thing;\n\
                    }});\n";
    assert_eq!(source, expected);
}

#[test]
fn test_exported_name_without_declaration_is_ignored() {
    let module = ModuleId::from("app/a");
    let statements = [declare_var("x", ExprBuilder::int(1))];

    let source = emitter()
        .emit(&module, &statements, &exported(&["x", "ghost"]))
        .unwrap();

    assert_eq!(source.matches("Object.defineProperty(exports").count(), 1);
    assert!(!source.contains("ghost"));
}

#[test]
fn test_nested_declarations_never_export() {
    // "x" is exported, but the only declaration of "x" lives inside a
    // function body.
    let module = ModuleId::from("app/a");
    let statements = [Statement::DeclareFn {
        name: "setup".to_string(),
        params: vec![],
        body: vec![declare_var("x", ExprBuilder::int(1))],
    }];

    let source = emitter()
        .emit(&module, &statements, &exported(&["x"]))
        .unwrap();

    assert!(!source.contains("defineProperty"));
    assert!(source.contains("var x = 1;"));
}

#[test]
fn test_malformed_reference_aborts_emission() {
    let module = ModuleId::from("app/a");
    let statements = [declare_var(
        "x",
        Expr::External(ExternalRef::new("app/b", "")),
    )];

    let err = emitter().emit(&module, &statements, &[]).unwrap_err();
    assert!(matches!(err, Error::MalformedReference));
}

#[test]
fn test_resolver_failure_aborts_emission() {
    struct RejectingResolver;

    impl ImportResolver for RejectingResolver {
        fn resolve(&self, from: &ModuleId, to: &ModuleId) -> vellum_core::Result<String> {
            Err(Error::UnresolvedImport {
                from: from.to_string(),
                to: to.to_string(),
                reason: "unknown module".to_string(),
            })
        }
    }

    let module = ModuleId::from("app/a");
    let statements = [declare_var("x", ExprBuilder::external("app/b", "y"))];

    let err = JavaScriptEmitter::new(RejectingResolver)
        .emit(&module, &statements, &[])
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedImport { .. }));
}

#[test]
fn test_emission_is_deterministic() {
    let module = ModuleId::from("app/a");
    let statements = [
        declare_var("x", ExprBuilder::external("app/b", "y")),
        declare_var("z", ExprBuilder::external("lib/util", "id")),
    ];
    let exports = exported(&["x", "z"]);

    let emitter = emitter();
    let first = emitter.emit(&module, &statements, &exports).unwrap();
    let second = emitter.emit(&module, &statements, &exports).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_import_table_does_not_leak_between_emissions() {
    let emitter = emitter();

    let first = emitter
        .emit(
            &ModuleId::from("app/a"),
            &[declare_var("x", ExprBuilder::external("app/b", "y"))],
            &[],
        )
        .unwrap();
    let second = emitter
        .emit(
            &ModuleId::from("app/c"),
            &[declare_var("p", ExprBuilder::external("app/d", "q"))],
            &[],
        )
        .unwrap();

    // Alias numbering restarts for every module.
    assert!(first.contains("var import0 = require('./b');"));
    assert!(second.contains("var import0 = require('./d');"));
    assert!(!second.contains("import1"));
}

#[test]
fn test_class_with_parent_from_another_module() {
    let module = ModuleId::from("app/widgets");
    let class = ClassStmt::new("Button")
        .with_parent(ExprBuilder::external("lib/component", "Component"))
        .with_constructor(ClassConstructor::new(
            vec!["label".to_string()],
            vec![
                Expr::Builtin(BuiltinVar::Super)
                    .call(vec![ExprBuilder::variable("label")])
                    .into_stmt(),
            ],
        ))
        .with_getter(ClassGetter::new(
            "title",
            vec![Statement::Return(Some(ExprBuilder::this().prop("label")))],
        ))
        .with_method(ClassMethod::new(
            "render",
            vec![],
            vec![Statement::Return(Some(ExprBuilder::this().prop("label")))],
        ));

    let source = emitter()
        .emit(
            &module,
            &[Statement::DeclareClass(class)],
            &exported(&["Button"]),
        )
        .unwrap();

    insta::assert_snapshot!(source.trim_end(), @r"
    var import0 = require('../lib/component');
    function Button(label) {
      import0.Component.call(this,label);
    }
    Button.prototype = Object.create(import0.Component.prototype);
    Object.defineProperty(Button.prototype, 'title', {get: function() {
      return this.label;
    }});
    Button.prototype.render = function() {
      return this.label;
    };
    Object.defineProperty(exports,'Button',{get: function() {
      return Button;
    }});
    ");
}

#[test]
fn test_reassignment_after_export_keeps_binding_live() {
    // The getter reads the variable at access time, so the statement order
    // var counter = 0; <export>; counter = 1; is observable as 1.
    let module = ModuleId::from("app/state");
    let statements = [
        declare_var("counter", ExprBuilder::int(0)),
        ExprBuilder::assign("counter", ExprBuilder::int(1)).into_stmt(),
    ];

    let source = emitter()
        .emit(&module, &statements, &exported(&["counter"]))
        .unwrap();

    let binding = source
        .find("Object.defineProperty(exports,'counter'")
        .expect("export binding missing");
    let declaration = source.find("var counter = 0;").expect("declaration missing");
    let reassignment = source.find("counter = 1;").expect("reassignment missing");
    assert!(declaration < binding);
    assert!(binding < reassignment);
    assert!(source.contains("get: function() {"));
    assert!(source.contains("return counter;"));
}
