mod react;
mod template;

pub use react::{react_prompt, render_text_description, render_tool_names, REACT_TEMPLATE};
pub use template::PromptTemplate;
