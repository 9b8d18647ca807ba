use crate::prelude::*;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a code snippet from a file, or from stdin when no path is given.
pub async fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre!("Failed to read '{}': {}", path.display(), e)),
        None => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .map_err(|e| eyre!("Failed to read stdin: {}", e))?;
            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_code_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "def foo(): pass").unwrap();

        let code = read_code(Some(file.path())).await.unwrap();
        assert_eq!(code, "def foo(): pass");
    }

    #[tokio::test]
    async fn test_read_code_missing_file_is_an_error() {
        let result = read_code(Some(Path::new("/nonexistent/snippet.py"))).await;
        assert!(result.is_err());
    }
}
