use web_sys::js_sys;
use yew::prelude::*;

pub const CODE_SNIPPETS: [&str; 13] = [
    "const forge = new Technology();",
    "function innovate() { return future; }",
    "import { creativity } from \"luminary\";",
    "export default Excellence;",
    "async function build() { await deploy(); }",
    "class Innovation extends Technology {}",
    "const result = await transform();",
    "return { success: true, data: innovation };",
    "interface Future { tech: Advanced; }",
    "type Solution = Creative & Efficient;",
    "system.init({ mode: \"turbo\" });",
    "<Forge />",
    "while(alive) { create(); }",
];

#[derive(Clone, Debug, PartialEq)]
pub struct CodeLine {
    pub id: usize,
    pub code: &'static str,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub left_percent: f64,
    pub font_size: &'static str,
    pub opacity: f64,
}

impl CodeLine {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; font-size: {}; --rain-opacity: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_percent, self.font_size, self.opacity, self.duration_secs, self.delay_secs
        )
    }
}

/// Picks a snippet for a random sample in `[0, 1)`.
pub fn pick_snippet(sample: f64) -> &'static str {
    let index = (sample.clamp(0.0, 1.0) * CODE_SNIPPETS.len() as f64) as usize;
    CODE_SNIPPETS[index.min(CODE_SNIPPETS.len() - 1)]
}

pub fn generate_code_lines(count: usize, mut random: impl FnMut() -> f64) -> Vec<CodeLine> {
    (0..count)
        .map(|id| CodeLine {
            id,
            code: pick_snippet(random()),
            duration_secs: random() * 15.0 + 10.0,
            delay_secs: random() * 5.0,
            left_percent: random() * 100.0,
            font_size: if random() > 0.7 { "0.8rem" } else { "0.6rem" },
            opacity: random() * 0.3 + 0.1,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CodeRainProps {
    #[prop_or(25)]
    pub lines: usize,
}

#[function_component(CodeRain)]
pub fn code_rain(props: &CodeRainProps) -> Html {
    let count = props.lines;
    // generated once per mount so re-renders don't reshuffle the rain
    let lines = use_state(move || generate_code_lines(count, js_sys::Math::random));

    html! {
        <div class="code-rain" aria-hidden="true">
            { for lines.iter().map(|line| html! {
                <div key={line.id} class="code-rain-line" style={line.style()}>
                    { line.code }
                </div>
            }) }
            <style>
                {r#"
.code-rain {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.code-rain-line {
    position: absolute;
    top: 0;
    white-space: nowrap;
    font-family: 'JetBrains Mono', monospace;
    color: var(--neon-green);
    opacity: 0;
    animation-name: code-fall;
    animation-timing-function: linear;
    animation-iteration-count: infinite;
}

@keyframes code-fall {
    0% { transform: translateY(-100vh); opacity: 0; }
    10% { opacity: var(--rain-opacity); }
    100% { transform: translateY(100vh); opacity: var(--rain-opacity); }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_choice_stays_in_bounds() {
        assert_eq!(pick_snippet(0.0), CODE_SNIPPETS[0]);
        assert_eq!(pick_snippet(0.9999), CODE_SNIPPETS[12]);
        assert_eq!(pick_snippet(1.0), CODE_SNIPPETS[12]);
        assert_eq!(pick_snippet(-3.0), CODE_SNIPPETS[0]);
    }

    #[test]
    fn lines_use_the_given_random_source() {
        let lines = generate_code_lines(3, || 0.5);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().map(|l| l.id).collect::<Vec<_>>(), vec![0, 1, 2]);
        let line = &lines[0];
        assert_eq!(line.code, CODE_SNIPPETS[6]);
        assert_eq!(line.duration_secs, 17.5);
        assert_eq!(line.delay_secs, 2.5);
        assert_eq!(line.left_percent, 50.0);
        assert_eq!(line.font_size, "0.6rem");
        assert!((line.opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn line_parameters_stay_in_range() {
        let mut seed = 7u64;
        let lines = generate_code_lines(200, || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 11) as f64 / (1u64 << 53) as f64
        });

        for line in &lines {
            assert!((10.0..25.0).contains(&line.duration_secs));
            assert!((0.0..5.0).contains(&line.delay_secs));
            assert!((0.0..100.0).contains(&line.left_percent));
            assert!((0.1..0.4).contains(&line.opacity));
            assert!(CODE_SNIPPETS.contains(&line.code));
        }
    }
}
