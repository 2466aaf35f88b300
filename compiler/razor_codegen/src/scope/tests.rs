use super::*;
use pretty_assertions::assert_eq;
use razor_ir::CodeGenerationOptions;

fn modifiers(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn test_nested_blocks_close_in_order() {
    let mut writer = CodeWriter::new(&CodeGenerationOptions::runtime());
    {
        let mut namespace = writer.build_namespace("Razor");
        let mut class = namespace.build_class_declaration(
            &modifiers(&["public"]),
            "Template",
            Some("Base<T>"),
            &modifiers(&["IDisposable"]),
        );
        let mut method = class.build_method_declaration(
            &modifiers(&["public", "async", "override"]),
            Some("global::System.Threading.Tasks.Task"),
            "ExecuteAsync",
            &[],
        );
        method.write_line("await x;");
    }

    assert_eq!(
        writer.as_str(),
        "\
namespace Razor
{
    public class Template : Base<T>, IDisposable
    {
        public async override global::System.Threading.Tasks.Task ExecuteAsync()
        {
            await x;
        }
    }
}
"
    );
    assert_eq!(writer.current_indent(), 0);
}

#[test]
fn test_method_parameters_and_constructor() {
    let mut writer = CodeWriter::new(&CodeGenerationOptions::runtime());
    let parameter = MethodParameter {
        modifiers: modifiers(&["ref"]),
        type_name: "int".to_string(),
        parameter_name: "count".to_string(),
    };
    drop(writer.build_method_declaration(&modifiers(&["public"]), None, "Template", &[parameter]));

    assert_eq!(writer.as_str(), "public Template(ref int count)\n{\n}\n");
}

#[test]
fn test_lambda_leaves_line_open() {
    let mut writer = CodeWriter::new(&CodeGenerationOptions::runtime());
    writer.write("Run(");
    {
        let mut lambda = writer.build_async_lambda(&["__writer"]);
        lambda.write_line("Work();");
    }
    writer.write_end_method_invocation(true);
    {
        let mut lambda = writer.build_lambda(&[]);
        lambda.write("x");
    }

    assert_eq!(
        writer.as_str(),
        "Run(async(__writer) => {\n    Work();\n});\n() => {\n    x\n}"
    );
}

#[test]
fn test_class_without_supertypes() {
    let mut writer = CodeWriter::new(&CodeGenerationOptions::runtime());
    drop(writer.build_class_declaration(&modifiers(&["internal", "sealed"]), "C", None, &[]));

    assert_eq!(writer.as_str(), "internal sealed class C\n{\n}\n");
}
