mod tests_role;
