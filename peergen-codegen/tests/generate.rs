use std::fs;

use peergen_codegen::{Generator, GeneratorConfig, MethodKind, Section, TemplateStore, VariantKind};
use peergen_core::GeneratedFile;
use peergen_dsl::parse_str;
use tempfile::TempDir;

const CLIENT: &str = "\
// Remote API
int getRandomNumber();
void sendMessage(QString username, QString message);
Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged)
";

fn generator<'a>(src: &str, templates: &'a TemplateStore) -> Generator<'a> {
    Generator::from_parsed("Client", &parse_str(src), &GeneratorConfig::default(), templates)
}

#[test]
fn random_number_end_to_end() {
    let templates = TemplateStore::builtin();
    let generator = generator("int getRandomNumber();", &templates);
    let source = generator.source().render();

    for definition in [
        "int Client::getRandomNumber()\n{",
        "int Client::getRandomNumberAsync()\n{",
        "int Client::getRandomNumberSlot()\n{",
        "int Client::getRandomNumber(const QObject *obj, const char *callbackSlot)\n{",
        "int Client::getRandomNumber(const QObject *obj, const QMetaMethod *callbackMethod)\n{",
        "int Client::getRandomNumber(std::function<void(int)> callbackFunction)\n{",
        "int Client::getRandomNumber(QJSValue callbackFunction)\n{",
    ] {
        assert!(source.contains(definition), "missing {}", definition);
    }

    assert!(source.contains("qlonglong id = invokeOnPeer(\"getRandomNumberSlot\");"));
    assert!(source.contains("int ret = call->returnData.value<int>();"));
    assert!(source.contains("emit getRandomNumberSignal(&ret);"));
    assert!(!source.contains('%'));

    let header = generator.header().render();
    assert!(header.contains("void getRandomNumberSignal(int *returnValue);"));
}

#[test]
fn reference_return_emits_value_types() {
    let templates = TemplateStore::builtin();
    let generator = generator("const QString &userName(int id);", &templates);

    let header = generator.header().render();
    assert!(header.contains("void userNameSignal(int id, QString *returnValue);"));
    assert!(header.contains("QString userNameSlot(int id);"));
    assert!(!header.contains("const QString &"));

    let source = generator.source().render();
    assert!(source.contains("QString ret = QString();"));
    assert!(source.contains("QString ret = call->returnData.value<QString>();"));
    assert!(source.contains("NeuronRemoteCall<QString> *call"));
    assert!(source.contains("return QString();"));
    assert!(!source.contains("&()"));
    assert!(!source.contains("& ret"));
}

#[test]
fn eight_variants_per_method() {
    let templates = TemplateStore::builtin();
    let generator = generator("void sendMessage(QString username, QString message);", &templates);
    let variants = generator.interface().variants();

    assert_eq!(variants.len(), 8);
    for kind in MethodKind::ALL {
        assert_eq!(
            variants
                .iter()
                .filter(|v| v.kind == VariantKind::Method(kind))
                .count(),
            1
        );
    }

    let signal = variants
        .iter()
        .find(|v| v.section == Section::Signals)
        .unwrap();
    assert_eq!(signal.name, "sendMessageSignal");
    assert_eq!(signal.signature, "QString username, QString message");

    let by_signal = variants
        .iter()
        .find(|v| v.kind == VariantKind::Method(MethodKind::BySignal))
        .unwrap();
    assert_eq!(
        by_signal.signature,
        "QString username, QString message, const QObject *obj, const char *callbackSlot"
    );
    assert!(variants.iter().all(|v| !v.signature.contains(", , ")));
}

#[test]
fn score_property() {
    let templates = TemplateStore::builtin();
    let generator = generator(
        "Q_PROPERTY(int score READ score WRITE setScore NOTIFY scoreChanged)",
        &templates,
    );
    let interface = generator.interface();

    assert_eq!(interface.variables(), ["int m_score;"]);
    assert_eq!(interface.variants().len(), 3);

    let source = generator.source().render();
    assert!(source.contains("int Client::score()\n{\n    return m_score;\n}"));
    assert!(source.contains(
        "void Client::setScore(int score)\n{\n    if (m_score == score)\n        return;\n\n    m_score = score;\n    emit scoreChanged(score);\n}"
    ));
    assert!(!source.contains("Client::scoreChanged"));

    let header = generator.header().render();
    assert!(header.contains("USER true)"));
    assert!(header.contains("    int m_score;\n"));
    assert!(header.contains("\nsignals:\n    void scoreChanged(int score);\n"));
}

#[test]
fn incomparable_property_always_notifies() {
    let templates = TemplateStore::builtin();
    let generator = generator(
        "Q_PROPERTY(QPixmap avatar READ avatar WRITE setAvatar NOTIFY avatarChanged)",
        &templates,
    );
    let source = generator.source().render();

    assert!(source.contains("    m_avatar = avatar;\n    emit avatarChanged(avatar);"));
    assert!(!source.contains("if (m_avatar == avatar)"));
}

#[test]
fn nested_type_includes_outer_header() {
    let templates = TemplateStore::builtin();
    let generator = generator("QHash<QString, int>::const_iterator first();", &templates);

    let includes: Vec<_> = generator.interface().includes().iter().map(String::as_str).collect();
    assert_eq!(includes, vec!["QHash", "QString"]);

    let header = generator.header().render();
    assert!(header.contains("#include <QHash>\n"));
    assert!(!header.contains("const_iterator>"));
}

#[test]
fn trailing_comment_keeps_declaration() {
    let templates = TemplateStore::builtin();
    let generator = generator("int getRandomNumber(); // dice roll", &templates);

    assert_eq!(generator.interface().variants().len(), 8);
    assert!(!generator.header().render().contains("dice roll"));
}

#[test]
fn malformed_lines_produce_nothing() {
    let templates = TemplateStore::builtin();
    let generator = generator("int getRandomNumber()\nnot a declaration at all\n", &templates);
    let interface = generator.interface();

    assert!(interface.variants().is_empty());
    assert!(interface.properties().is_empty());
    assert!(interface.variables().is_empty());
}

#[test]
fn output_is_byte_identical_across_runs() {
    let templates = TemplateStore::builtin();
    let first = generator(CLIENT, &templates).preview();
    let second = generator(CLIENT, &templates).preview();

    assert_eq!(first, second);
}

#[test]
fn writes_both_documents() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("generated");
    let templates = TemplateStore::builtin();
    let generator = generator(CLIENT, &templates);

    let result = generator.generate(&out).unwrap();

    assert_eq!(result.written(), 2);
    let header = fs::read_to_string(out.join("client.h")).unwrap();
    let source = fs::read_to_string(out.join("client.cpp")).unwrap();
    assert!(header.starts_with("#ifndef CLIENT_H"));
    assert!(header.contains("#include <QString>\n"));
    assert!(source.starts_with("#include \"client.h\""));
}

#[test]
fn missing_template_leaves_marker() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("method_async"), "\n").unwrap();
    let templates = TemplateStore::builtin().with_overrides(temp.path()).unwrap();
    let generator = generator("int getRandomNumber();", &templates);

    let source = generator.source().render();

    assert!(source.contains("int Client::getRandomNumberAsync()\n{\n//Error loading method_async\n}"));
    assert!(source.contains("qlonglong id = invokeOnPeer(\"getRandomNumberSlot\");"));
}
