//! Template service files written by `fnship init`

pub const MAIN_PY: &str = r#"# Base libraries for the cloud function
import os

import functions_framework
from flask import jsonify

## Notebook logic goes here


# Single HTTP entry point of the function
@functions_framework.http
def {{entry_point}}(request):
    """Run the pipeline for one request."""
    # Move the notebook logic into an API-shaped body here.

    # Expected output: a message plus response data
    return jsonify({"message": "executed successfully", "data": None})
"#;

pub const LOCAL_MAIN_PY: &str = r#"import os

from flask import Flask, jsonify, request
from yaml import Loader, load

from main import {{entry_point}}

# Load the function's environment variables from the local file
with open("local_env.yaml", "r") as file:
    env = load(file, Loader=Loader) or {}
    for key, value in env.items():
        os.environ[key] = str(value)

app = Flask(__name__)


@app.route("/", methods=["POST"])
@app.route("/endpoint", methods=["POST"])
def endpoint():
    """Local stand-in for the deployed entry point"""
    return {{entry_point}}(request)


@app.route("/health", methods=["GET"])
def health():
    """Health check"""
    return jsonify({"status": "ok"})


if __name__ == "__main__":
    port = int(os.getenv("PORT", 4911))
    print(f"Running on http://localhost:{port}")
    app.run(host="0.0.0.0", port=port, debug=True)
"#;

pub const LOCAL_ENV_YAML: &str = r#"# Environment variables for {{name}}.
# Read by local_main.py for local runs and passed to the deploy command.
# Values must be scalars.
SERVICE_NAME: {{name}}
"#;

pub const REQUIREMENTS_TXT: &str = "functions-framework\nflask\n";
