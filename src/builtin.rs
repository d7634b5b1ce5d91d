//! Built-in template bodies.

pub const COMPONENT_TS: &str = r#"import { Component } from 'solid-js';
import styles from './TemplateName.module.css';

const TemplateName: Component = () => (
  <div class={styles.TemplateName} data-testid="TemplateName">
    TemplateName Component
  </div>
);

export default TemplateName;
"#;

pub const COMPONENT_JS: &str = r#"import styles from './TemplateName.module.css';

const TemplateName = () => (
  <div class={styles.TemplateName} data-testid="TemplateName">
    TemplateName Component
  </div>
);

export default TemplateName;
"#;

pub const STYLE: &str = r#".TemplateName {
}
"#;

pub const TEST: &str = r#"import { render } from 'solid-testing-library';
import TemplateName from '.';

describe('<TemplateName />', () => {
  test('it should mount', () => {
    const { getByTestId, unmount } = render(() => <TemplateName />);
    const templateName = getByTestId('TemplateName');

    expect(templateName).toBeInTheDocument();
    unmount();
  });
});
"#;

pub const MODEL: &str = r#"declare const styles: {
  readonly TemplateName: string;
};

export default styles;
"#;

// fragments rewritten by the component resolver
pub(crate) const TEST_ID_ATTR: &str = r#" data-testid="TemplateName""#;
pub(crate) const CLASS_ATTR: &str = " class={styles.TemplateName}";
pub(crate) const CLASS_LOOKUP: &str = "{styles.TemplateName}";
pub(crate) const MODULE_IMPORT_PATH: &str = "'./TemplateName.module.css'";
pub(crate) const MODULE_IMPORT_BINDING: &str = "styles from './TemplateName.module.css'";
pub(crate) const MODULE_IMPORT_LINE: &str = "import styles from './TemplateName.module.css';\n";
