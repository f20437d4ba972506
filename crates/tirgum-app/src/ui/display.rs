use tirgum_types::{Phase, SessionView};

/// Input box and read-only output box
pub struct DisplayPanel {
    echo: bool,
    last: Option<String>,
}

impl DisplayPanel {
    pub fn new(echo: bool) -> Self {
        Self { echo, last: None }
    }

    pub fn render(&self, view: &SessionView) -> String {
        let direction = view.direction;
        let output = match (view.output(), view.phase) {
            ("", Phase::Pending) => "…".to_string(),
            ("", _) => format!("({})", direction.output_placeholder()),
            (output, _) => output.to_string(),
        };

        let mut out = format!(
            "[{}] {}\n> {}\n= {}",
            direction.title(),
            direction.input_label(),
            view.input,
            output
        );

        if self.echo {
            out.push_str(&format!("\n{} : {}", view.input, view.translated));
        }

        out
    }

    /// Rendered panel if it differs from the last one shown
    pub fn update(&mut self, view: &SessionView) -> Option<String> {
        let rendered = self.render(view);
        if self.last.as_ref() == Some(&rendered) {
            return None;
        }
        self.last = Some(rendered.clone());
        Some(rendered)
    }
}
