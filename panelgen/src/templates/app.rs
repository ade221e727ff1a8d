//! Routing, state, API and auth templates

/// Router with one listing route per model and form routes for page models
pub const ROUTES: &str = r#"import { createBrowserRouter } from "react-router-dom";
import DashboardLayout from "@/layout/DashboardLayout";
import Dashboard from "@/pages/Dashboard";
import { LoginPage } from "@/pages/Auth/LoginPage";
import { RequireAuth } from "@/context/AuthContext";
{{#each models}}
import { {{component_name}}DataTable } from "@/pages/{{component_name}}/{{component_name}}DataTable";
{{#unless is_popup}}
import { {{component_name}}Form } from "@/components/forms/{{component_name}}/{{component_name}}Form";
{{/unless}}
{{/each}}

const router = createBrowserRouter([
  { path: "/login", element: <LoginPage /> },
  {
    path: "/",
    element: (
      <RequireAuth>
        <DashboardLayout />
      </RequireAuth>
    ),
    children: [
      { index: true, element: <Dashboard /> },
{{#each models}}
{{#if is_popup}}
      // {{title}}: create and edit open in a dialog
      { path: "{{list_path}}", element: <{{component_name}}DataTable /> },
{{else}}
      { path: "{{list_path}}", element: <{{component_name}}DataTable /> },
      { path: "{{create_path}}", element: <{{component_name}}Form /> },
      { path: "{{edit_path}}/:id", element: <{{component_name}}Form /> },
{{/if}}
{{/each}}
    ],
  },
]);

export default router;
"#;

/// Redux store with one reducer per model
pub const STORE: &str = r#"import { configureStore } from "@reduxjs/toolkit";
{{#each models}}
import {{slice_name}}Reducer from "./slices/{{slice_name}}Slice";
{{/each}}

export const store = configureStore({
  reducer: {
{{#each models}}
    {{slice_name}}: {{slice_name}}Reducer,
{{/each}}
  },
});

export type RootState = ReturnType<typeof store.getState>;
export type AppDispatch = typeof store.dispatch;
"#;

/// Typed Redux hooks
pub const STORE_HOOKS: &str = r#"import { useDispatch, useSelector } from "react-redux";
import type { AppDispatch, RootState } from "./store";

export const useAppDispatch = useDispatch.withTypes<AppDispatch>();
export const useAppSelector = useSelector.withTypes<RootState>();
"#;

/// Generic async thunk over the API client
pub const API_THUNK: &str = r#"import { createAsyncThunk } from "@reduxjs/toolkit";

/**
 * Creates an async thunk that resolves to the response body.
 *
 * @example
 * export const fetchUsers = createApiThunk("users/fetchAll", () => api.get("/users"));
 */
export const createApiThunk = <Returned, ThunkArg>(
  typePrefix: string,
  apiCall: (arg: ThunkArg) => Promise<{ data: Returned }>,
) =>
  createAsyncThunk<Returned, ThunkArg>(typePrefix, async (arg, { rejectWithValue }) => {
    try {
      const response = await apiCall(arg);
      return response.data;
    } catch (error) {
      // The response interceptor has already unwrapped the error body
      return rejectWithValue(error);
    }
  });
"#;

/// Axios instance with auth and error interceptors
pub const API_CLIENT: &str = r#"import axios from "axios";

// Set VITE_API_BASE_URL in .env.local, see .env.example
const api = axios.create({
  baseURL: import.meta.env.VITE_API_BASE_URL,
  headers: {
    Accept: "application/json",
  },
});

api.interceptors.request.use(
  (config) => {
    const token = localStorage.getItem("authToken");
    if (token) {
      config.headers.Authorization = `Bearer ${token}`;
    }
    return config;
  },
  (error) => Promise.reject(error),
);

api.interceptors.response.use(
  (response) => response,
  (error) => {
    if (error.response?.status === 401) {
      localStorage.removeItem("authToken");
      localStorage.removeItem("userData");
      window.location.href = "/login";
    }
    return Promise.reject(error.response ? error.response.data : error);
  },
);

const get = <T>(url: string, params?: object) => api.get<T>(url, { params });
const post = <T>(url: string, data: object) => api.post<T>(url, data);
const put = <T>(url: string, data: object) => api.put<T>(url, data);
const patch = <T>(url: string, data: object) => api.patch<T>(url, data);
// `delete` is reserved
const del = <T>(url: string) => api.delete<T>(url);

export const apiService = {
  get,
  post,
  put,
  patch,
  del,
};

export default api;
"#;

/// Environment file template
pub const ENV_EXAMPLE: &str = r"# Copy to .env.local and point at your API.
VITE_API_BASE_URL=http://localhost:5000/api
";

/// Auth state, provider and route guard
pub const AUTH_CONTEXT: &str = r#"import { createContext, useContext, useEffect, useState } from "react";
import type { ReactNode } from "react";
import { Navigate, useLocation } from "react-router-dom";

export interface AuthUser {
  id: string;
  username: string;
  email: string;
  role: string;
}

interface AuthContextType {
  isAuthenticated: boolean;
  user: AuthUser | null;
  isLoading: boolean;
  login: (username: string, password: string) => Promise<{ success: boolean; error?: string }>;
  logout: () => void;
}

const AuthContext = createContext<AuthContextType | undefined>(undefined);

export function AuthProvider({ children }: { children: ReactNode }) {
  const [user, setUser] = useState<AuthUser | null>(null);
  const [isLoading, setIsLoading] = useState(true);

  useEffect(() => {
    try {
      const token = localStorage.getItem("authToken");
      const userData = localStorage.getItem("userData");
      if (token && userData) {
        setUser(JSON.parse(userData) as AuthUser);
      }
    } catch (error) {
      console.error("Error restoring session:", error);
      localStorage.removeItem("authToken");
      localStorage.removeItem("userData");
    } finally {
      setIsLoading(false);
    }
  }, []);

  // Replace with a call to your authentication endpoint
  const login = async (username: string, password: string) => {
    setIsLoading(true);
    try {
      await new Promise((resolve) => setTimeout(resolve, 500));
      if (username !== "admin" || password !== "password") {
        return { success: false, error: "Invalid username or password" };
      }
      const authUser: AuthUser = {
        id: "1",
        username,
        email: "admin@example.com",
        role: "administrator",
      };
      localStorage.setItem("authToken", `demo-token-${Date.now()}`);
      localStorage.setItem("userData", JSON.stringify(authUser));
      setUser(authUser);
      return { success: true };
    } finally {
      setIsLoading(false);
    }
  };

  const logout = () => {
    setUser(null);
    localStorage.removeItem("authToken");
    localStorage.removeItem("userData");
  };

  const value: AuthContextType = {
    isAuthenticated: user !== null,
    user,
    isLoading,
    login,
    logout,
  };

  return <AuthContext.Provider value={value}>{children}</AuthContext.Provider>;
}

export function useAuth(): AuthContextType {
  const context = useContext(AuthContext);
  if (context === undefined) {
    throw new Error("useAuth must be used within an AuthProvider");
  }
  return context;
}

export function RequireAuth({ children }: { children: ReactNode }) {
  const { isAuthenticated, isLoading } = useAuth();
  const location = useLocation();

  if (isLoading) {
    return null;
  }
  if (!isAuthenticated) {
    return <Navigate to="/login" replace state={ { from: location } } />;
  }
  return <>{children}</>;
}
"#;

/// Login page
pub const LOGIN_PAGE: &str = r#"import { useState } from "react";
import { useForm } from "react-hook-form";
import { zodResolver } from "@hookform/resolvers/zod";
import * as z from "zod";
import { useNavigate } from "react-router-dom";
import { useTranslation } from "react-i18next";
import { Button } from "@/components/ui/button";
import { Form, FormControl, FormField, FormItem, FormLabel, FormMessage } from "@/components/ui/form";
import { Input } from "@/components/ui/input";
import { Card, CardContent, CardDescription, CardHeader, CardTitle } from "@/components/ui/card";
import { useAuth } from "@/context/AuthContext";

const loginSchema = z.object({
  username: z.string().min(1, { message: "Username is required." }),
  password: z.string().min(6, { message: "Password must be at least 6 characters." }),
});

type LoginValues = z.infer<typeof loginSchema>;

export function LoginPage() {
  const navigate = useNavigate();
  const { t } = useTranslation();
  const { login } = useAuth();
  const [error, setError] = useState<string | null>(null);

  const form = useForm<LoginValues>({
    resolver: zodResolver(loginSchema),
    defaultValues: {
      username: "",
      password: "",
    },
  });

  async function onSubmit(values: LoginValues) {
    setError(null);
    const result = await login(values.username, values.password);
    if (result.success) {
      navigate("/");
    } else {
      setError(result.error ?? "Login failed");
    }
  }

  return (
    <div className="flex items-center justify-center min-h-screen bg-background p-4">
      <Card className="w-full max-w-sm">
        <CardHeader>
          <CardTitle className="text-2xl">{t("login.title")}</CardTitle>
          <CardDescription>{t("login.description")}</CardDescription>
        </CardHeader>
        <CardContent>
          <Form {...form}>
            <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-6">
              <FormField
                control={form.control}
                name="username"
                render={({ field }) => (
                  <FormItem>
                    <FormLabel>{t("login.usernameLabel")}</FormLabel>
                    <FormControl>
                      <Input placeholder="admin" autoComplete="username" {...field} />
                    </FormControl>
                    <FormMessage />
                  </FormItem>
                )}
              />
              <FormField
                control={form.control}
                name="password"
                render={({ field }) => (
                  <FormItem>
                    <FormLabel>{t("login.passwordLabel")}</FormLabel>
                    <FormControl>
                      <Input type="password" autoComplete="current-password" {...field} />
                    </FormControl>
                    <FormMessage />
                  </FormItem>
                )}
              />
              {error && <p className="text-sm text-destructive">{error}</p>}
              <Button type="submit" className="w-full" disabled={form.formState.isSubmitting}>
                {t("login.signInButton")}
              </Button>
            </form>
          </Form>
        </CardContent>
      </Card>
    </div>
  );
}
"#;

/// Application entry point
pub const MAIN: &str = r#"import React from "react";
import ReactDOM from "react-dom/client";
import { Provider } from "react-redux";
import { RouterProvider } from "react-router-dom";
import "./index.css";
import "./i18n";
import router from "./routes/routes";
import { store } from "./store/store";
import { ThemeProvider } from "@/components/theme-provider";
import { AuthProvider } from "@/context/AuthContext";

ReactDOM.createRoot(document.getElementById("root")!).render(
  <React.StrictMode>
    <Provider store={store}>
      <ThemeProvider defaultTheme="dark" storageKey="vite-ui-theme">
        <AuthProvider>
          <RouterProvider router={router} />
        </AuthProvider>
      </ThemeProvider>
    </Provider>
  </React.StrictMode>,
);
"#;
