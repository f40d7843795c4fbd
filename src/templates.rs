//! Built-in bash.bashrc templates and placeholder constants.
//!
//! The default templates wrap a license header, prompt/alias setup, the
//! banner here-doc block and a root-user warning. Callers can override them
//! with an inline template or a template file.

use std::sync::LazyLock;

/// The placeholder for the PS1 prefix.
pub const PH_PS1: &str = "{PS1}";

/// The placeholder for the figlet banner.
pub const PH_BANNER: &str = "{BANNER}";

/// The placeholder for the subtitle below the banner.
pub const PH_SUBTITLE: &str = "{SUBTITLE}";

/// Shared top half of the built-in templates, up to the opening of the
/// banner here-doc.
const DEFAULT_TOP: &str = r#"# Copyright 2018 The TensorFlow Authors. All Rights Reserved.
# Copyright 2020 University of Waikato, Hamilton, NZ. All Rights Reserved.
#
# Licensed under the Apache License, Version 2.0 (the "License");
# you may not use this file except in compliance with the License.
# You may obtain a copy of the License at
#
#     http://www.apache.org/licenses/LICENSE-2.0
#
# Unless required by applicable law or agreed to in writing, software
# distributed under the License is distributed on an "AS IS" BASIS,
# WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
# See the License for the specific language governing permissions and
# limitations under the License.
#
# ==============================================================================

export PS1="\[\e[31m\]{PS1}\[\e[m\] \[\e[33m\]\w\[\e[m\] > "
export TERM=xterm-256color
alias grep="grep --color=auto"
alias ls="ls --color=auto"

echo -e "\e[1;31m"
cat<<DBG
"#;

/// Shared bottom half: closes the here-doc and emits the root-user warning.
const DEFAULT_BOTTOM: &str = r#"
DBG
echo -e "\e[0;33m"

if [[ $EUID -eq 0 ]]; then
  cat <<WARN
WARNING: You are running this container as root, which can cause new files in
mounted volumes to be created as the root user on your host machine.

To avoid this, run the container by specifying your user's userid:

$ docker run -u \$(id -u):\$(id -g) args...
WARN
else
  cat <<EXPL
You are running this container as user with ID $(id -u) and group $(id -g),
which should map to the ID and group for your user on the Docker host. Great!
EXPL
fi

# Turn off colors
echo -e "\e[m"
"#;

/// Built-in template without a subtitle placeholder.
pub static DEFAULT_TEMPLATE: LazyLock<String> =
    LazyLock::new(|| format!("{DEFAULT_TOP}{PH_BANNER}\n{DEFAULT_BOTTOM}"));

/// Built-in template with a subtitle line below the banner.
pub static DEFAULT_TEMPLATE_SUBTITLE: LazyLock<String> =
    LazyLock::new(|| format!("{DEFAULT_TOP}{PH_BANNER}\n{PH_SUBTITLE}\n{DEFAULT_BOTTOM}"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains(PH_BANNER));
        assert!(DEFAULT_TEMPLATE.contains(PH_PS1));
        assert!(!DEFAULT_TEMPLATE.contains(PH_SUBTITLE));
    }

    #[test]
    fn test_subtitle_template_placeholders() {
        assert!(DEFAULT_TEMPLATE_SUBTITLE.contains(PH_BANNER));
        assert!(DEFAULT_TEMPLATE_SUBTITLE.contains(PH_PS1));
        assert!(DEFAULT_TEMPLATE_SUBTITLE.contains(PH_SUBTITLE));
    }

    #[test]
    fn test_banner_placeholder_appears_once() {
        assert_eq!(DEFAULT_TEMPLATE.matches(PH_BANNER).count(), 1);
        assert_eq!(DEFAULT_TEMPLATE_SUBTITLE.matches(PH_BANNER).count(), 1);
    }

    #[test]
    fn test_templates_share_top_and_bottom() {
        assert!(DEFAULT_TEMPLATE.starts_with(DEFAULT_TOP));
        assert!(DEFAULT_TEMPLATE.ends_with(DEFAULT_BOTTOM));
        assert!(DEFAULT_TEMPLATE_SUBTITLE.starts_with(DEFAULT_TOP));
        assert!(DEFAULT_TEMPLATE_SUBTITLE.ends_with(DEFAULT_BOTTOM));
    }

    #[test]
    fn test_here_doc_markers_present() {
        assert!(DEFAULT_TEMPLATE.contains("cat<<DBG"));
        assert!(DEFAULT_TEMPLATE.contains("\nDBG\n"));
        assert!(DEFAULT_TEMPLATE.contains("WARNING: You are running this container as root"));
    }
}
