use std::fs;
use std::path::{Path, PathBuf};

/// A realistic Poetry manifest with caret constraints in both dependency
/// locations plus unrelated sections that must pass through untouched.
pub const PYPROJECT: &str = r#"[tool.poetry]
name = "test"
version = "0.1.0"
description = "Test"
authors = ["Paul Sanders <psanders1@gmail.com>"]
license = "MIT"
readme = "README.md"

[tool.poetry.dependencies]
python = "^3.8"
camel-converter = {version = "^3.0.0", extras = ["pydantic"]}
meilisearch-python-async = "^1.0.0"
twilio-python-async = "^0.2.0"

[tool.poetry.group.dev.dependencies]
black = "^23.1.0"
isort = "^5.12.0"
mypy = "^1.0.0"
pytest = "^7.2.1"
ruff = "^0.0.247"

[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"

[tool.black]
line-length = 100

[tool.isort]
profile = "black"
line_length = 100

[tool.ruff]
select = ["E", "F", "T201", "T203"]
ignore = ["E501"]
"#;

/// [`PYPROJECT`] after caps are removed.
pub const PYPROJECT_UNCAPPED: &str = r#"[tool.poetry]
name = "test"
version = "0.1.0"
description = "Test"
authors = ["Paul Sanders <psanders1@gmail.com>"]
license = "MIT"
readme = "README.md"

[tool.poetry.dependencies]
python = ">=3.8"
camel-converter = {version = ">=3.0.0", extras = ["pydantic"]}
meilisearch-python-async = ">=1.0.0"
twilio-python-async = ">=0.2.0"

[tool.poetry.group.dev.dependencies]
black = ">=23.1.0"
isort = ">=5.12.0"
mypy = ">=1.0.0"
pytest = ">=7.2.1"
ruff = ">=0.0.247"

[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"

[tool.black]
line-length = 100

[tool.isort]
profile = "black"
line_length = 100

[tool.ruff]
select = ["E", "F", "T201", "T203"]
ignore = ["E501"]
"#;

pub fn write_pyproject(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("pyproject.toml");
    fs::write(&path, contents).unwrap();
    path
}
