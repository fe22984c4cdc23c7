use leptos::prelude::*;
use leptos_icons::Icon;
use terminalx_core::{HistoryEntry, Output as OutputData};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(entry: HistoryEntry) -> impl IntoView {
    match entry.output {
        OutputData::Banner {
            title,
            hint,
            system_time,
        } => view! {
            <div class=css::banner>
                <div class=css::bannerTitle>
                    <span class=css::textAccent><Icon icon=ic::TERMINAL /></span>
                    <h1>{title}</h1>
                </div>
                <div>{hint}</div>
                <div class=css::textDim>{format!("System time: {}", system_time)}</div>
            </div>
        }
        .into_any(),
        OutputData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=css::textGreen>{prompt}</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        OutputData::Help(rows) => view! {
            <div class=css::line>
                <p class=css::fontBold>"Available commands:"</p>
                <div class=css::helpGrid>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <div class=css::helpRow>
                                <span class=css::helpName>{row.command}</span>
                                <span class=css::textDim>{row.description}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        OutputData::Listing(entries) => view! {
            <div class=css::listGrid>
                {entries
                    .into_iter()
                    .map(|e| {
                        let (icon, class) = if e.is_dir {
                            (ic::FOLDER, format!("{} {}", css::textCyan, css::fontBold))
                        } else {
                            (ic::FILE, css::textFg.to_string())
                        };
                        view! {
                            <div class=css::listEntry>
                                <Icon icon=icon />
                                <span class=class>{e.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        OutputData::FileContent(text) => view! {
            <pre class=css::fileContent>{text}</pre>
        }
        .into_any(),
        output @ OutputData::CpuUsage(_) => view! {
            <div class=css::reading>
                <span class=css::textYellow><Icon icon=ic::CPU /></span>
                {output.to_plain_text()}
            </div>
        }
        .into_any(),
        output @ OutputData::MemoryUsage { .. } => view! {
            <div class=css::reading>
                <span class=css::textCyan><Icon icon=ic::MEMORY /></span>
                {output.to_plain_text()}
            </div>
        }
        .into_any(),
        output @ OutputData::ProcessTable(_) => view! {
            <div class=css::reading>
                <span class=css::textDim><Icon icon=ic::SERVER /></span>
                <pre class=css::table>{output.to_plain_text()}</pre>
            </div>
        }
        .into_any(),
    }
}
